use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::tag::application::domain::entities::Tag;
use crate::modules::tag::application::ports::outgoing::{TagRepository, TagRepositoryError};
use crate::shared::catalog::BulkSaved;
use crate::shared::db::is_unique_violation;

use super::sea_orm_entity::{ActiveModel as TagActiveModel, Column as TagColumn, Entity as TagEntity};

#[derive(Debug, Clone)]
pub struct TagRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TagRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TagRepository for TagRepositoryPostgres {
    async fn create_and_restore(
        &self,
        names: Vec<String>,
        restore_ids: Vec<Uuid>,
    ) -> Result<BulkSaved<Tag>, TagRepositoryError> {
        let now = Utc::now().fixed_offset();
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let mut created = Vec::with_capacity(names.len());
        for name in names {
            let model = TagActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set(name),
                is_deleted: Set(false),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(&txn)
            .await
            .map_err(map_db_err)?;
            created.push(model.to_domain());
        }

        let mut restored = Vec::new();
        if !restore_ids.is_empty() {
            let mut changes = <TagActiveModel as Default>::default();
            changes.is_deleted = Set(false);
            changes.updated_at = Set(now);

            restored = TagEntity::update_many()
                .set(changes)
                .filter(TagColumn::Id.is_in(restore_ids))
                .filter(TagColumn::IsDeleted.eq(true))
                .exec_with_returning(&txn)
                .await
                .map_err(map_db_err)?
                .iter()
                .map(|m| m.to_domain())
                .collect();
        }

        txn.commit().await.map_err(map_db_err)?;

        Ok(BulkSaved { created, restored })
    }

    async fn soft_delete_many(&self, ids: &[Uuid]) -> Result<u64, TagRepositoryError> {
        let mut changes = <TagActiveModel as Default>::default();
        changes.is_deleted = Set(true);
        changes.updated_at = Set(Utc::now().fixed_offset());

        let result = TagEntity::update_many()
            .set(changes)
            .filter(TagColumn::Id.is_in(ids.to_vec()))
            .filter(TagColumn::IsDeleted.eq(false))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}

fn map_db_err(e: DbErr) -> TagRepositoryError {
    if is_unique_violation(&e) {
        TagRepositoryError::AlreadyExists
    } else {
        TagRepositoryError::DatabaseError(e.to_string())
    }
}
