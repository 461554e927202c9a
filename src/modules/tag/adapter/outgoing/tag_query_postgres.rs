use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::tag::application::domain::entities::Tag;
use crate::modules::tag::application::ports::outgoing::{TagQuery, TagQueryError};
use crate::shared::db::contains_pattern;
use crate::shared::pagination::PageRequest;

use super::sea_orm_entity::{Column as TagColumn, Entity as TagEntity};

#[derive(Debug, Clone)]
pub struct TagQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TagQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TagQuery for TagQueryPostgres {
    async fn find_by_names(&self, names: &[String]) -> Result<Vec<Tag>, TagQueryError> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let lowered: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();

        let models = TagEntity::find()
            .filter(Expr::expr(Func::lower(Expr::col(TagColumn::Name))).is_in(lowered))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn find_live_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Tag>, TagQueryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = TagEntity::find()
            .filter(TagColumn::Id.is_in(ids.to_vec()))
            .filter(TagColumn::IsDeleted.eq(false))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn list(
        &self,
        keyword: Option<&str>,
        page: PageRequest,
    ) -> Result<(Vec<Tag>, u64), TagQueryError> {
        let mut query = TagEntity::find().filter(TagColumn::IsDeleted.eq(false));

        if let Some(keyword) = keyword {
            let pattern = contains_pattern(keyword);
            query = query.filter(Expr::col(TagColumn::Name).ilike(&pattern));
        }

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .order_by_asc(TagColumn::Name)
            .offset(page.offset())
            .limit(page.page_size())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok((models.iter().map(|m| m.to_domain()).collect(), total))
    }
}

fn map_db_err(e: DbErr) -> TagQueryError {
    TagQueryError::DatabaseError(e.to_string())
}
