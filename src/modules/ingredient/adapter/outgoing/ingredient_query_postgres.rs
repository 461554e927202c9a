use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::ingredient::application::domain::entities::Ingredient;
use crate::modules::ingredient::application::ports::outgoing::{
    IngredientListFilter, IngredientQuery, IngredientQueryError,
};
use crate::shared::db::contains_pattern;
use crate::shared::pagination::PageRequest;

use super::sea_orm_entity::{Column as IngredientColumn, Entity as IngredientEntity};

#[derive(Debug, Clone)]
pub struct IngredientQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl IngredientQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IngredientQuery for IngredientQueryPostgres {
    async fn find_by_names(
        &self,
        names: &[String],
    ) -> Result<Vec<Ingredient>, IngredientQueryError> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let lowered: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();

        let models = IngredientEntity::find()
            .filter(Expr::expr(Func::lower(Expr::col(IngredientColumn::Name))).is_in(lowered))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn find_live_by_ids(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Ingredient>, IngredientQueryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = IngredientEntity::find()
            .filter(IngredientColumn::Id.is_in(ids.to_vec()))
            .filter(IngredientColumn::IsDeleted.eq(false))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn list(
        &self,
        filter: &IngredientListFilter,
        page: PageRequest,
    ) -> Result<(Vec<Ingredient>, u64), IngredientQueryError> {
        let mut query = IngredientEntity::find().filter(IngredientColumn::IsDeleted.eq(false));

        if let Some(keyword) = &filter.keyword {
            let pattern = contains_pattern(keyword);
            query = query.filter(Expr::col(IngredientColumn::Name).ilike(&pattern));
        }

        if let Some(ingredient_type) = &filter.ingredient_type {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(IngredientColumn::IngredientType)))
                    .eq(ingredient_type.to_lowercase()),
            );
        }

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .order_by_asc(IngredientColumn::Name)
            .offset(page.offset())
            .limit(page.page_size())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok((models.iter().map(|m| m.to_domain()).collect(), total))
    }
}

fn map_db_err(e: DbErr) -> IngredientQueryError {
    IngredientQueryError::DatabaseError(e.to_string())
}
