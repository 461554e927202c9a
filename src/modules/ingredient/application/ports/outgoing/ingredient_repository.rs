use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::ingredient::application::domain::entities::{Ingredient, IngredientInput};
use crate::shared::catalog::BulkSaved;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngredientRepositoryError {
    #[error("Ingredient already exists")]
    AlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// Inserts `new` and revives each deleted row in `restore`, overwriting
    /// its type and image URL with the paired input. One transaction.
    async fn create_and_restore(
        &self,
        new: Vec<IngredientInput>,
        restore: Vec<(Uuid, IngredientInput)>,
    ) -> Result<BulkSaved<Ingredient>, IngredientRepositoryError>;

    async fn soft_delete_many(&self, ids: &[Uuid]) -> Result<u64, IngredientRepositoryError>;
}
