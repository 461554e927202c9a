use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::ingredient::application::domain::entities::{Ingredient, IngredientInput};
use crate::modules::ingredient::application::ports::outgoing::{
    IngredientRepository, IngredientRepositoryError,
};
use crate::shared::catalog::BulkSaved;
use crate::shared::db::is_unique_violation;

use super::sea_orm_entity::{
    ActiveModel as IngredientActiveModel, Column as IngredientColumn, Entity as IngredientEntity,
};

#[derive(Debug, Clone)]
pub struct IngredientRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl IngredientRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IngredientRepository for IngredientRepositoryPostgres {
    async fn create_and_restore(
        &self,
        new: Vec<IngredientInput>,
        restore: Vec<(Uuid, IngredientInput)>,
    ) -> Result<BulkSaved<Ingredient>, IngredientRepositoryError> {
        let now = Utc::now().fixed_offset();
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let mut created = Vec::with_capacity(new.len());
        for input in new {
            let model = IngredientActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set(input.name().to_string()),
                ingredient_type: Set(input.ingredient_type().to_string()),
                image_url: Set(input.image_url().map(str::to_string)),
                is_deleted: Set(false),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(&txn)
            .await
            .map_err(map_db_err)?;
            created.push(model.to_domain());
        }

        let mut restored = Vec::with_capacity(restore.len());
        for (id, input) in restore {
            let mut changes = <IngredientActiveModel as Default>::default();
            changes.is_deleted = Set(false);
            changes.ingredient_type = Set(input.ingredient_type().to_string());
            changes.image_url = Set(input.image_url().map(str::to_string));
            changes.updated_at = Set(now);

            let rows = IngredientEntity::update_many()
                .set(changes)
                .filter(IngredientColumn::Id.eq(id))
                .filter(IngredientColumn::IsDeleted.eq(true))
                .exec_with_returning(&txn)
                .await
                .map_err(map_db_err)?;
            restored.extend(rows.iter().map(|m| m.to_domain()));
        }

        txn.commit().await.map_err(map_db_err)?;

        Ok(BulkSaved { created, restored })
    }

    async fn soft_delete_many(&self, ids: &[Uuid]) -> Result<u64, IngredientRepositoryError> {
        let mut changes = <IngredientActiveModel as Default>::default();
        changes.is_deleted = Set(true);
        changes.updated_at = Set(Utc::now().fixed_offset());

        let result = IngredientEntity::update_many()
            .set(changes)
            .filter(IngredientColumn::Id.is_in(ids.to_vec()))
            .filter(IngredientColumn::IsDeleted.eq(false))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}

fn map_db_err(e: DbErr) -> IngredientRepositoryError {
    if is_unique_violation(&e) {
        IngredientRepositoryError::AlreadyExists
    } else {
        IngredientRepositoryError::DatabaseError(e.to_string())
    }
}
