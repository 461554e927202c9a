use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::ingredient::application::domain::entities::Ingredient;
use crate::shared::pagination::PageRequest;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngredientQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Filters of the public ingredient list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientListFilter {
    pub keyword: Option<String>,
    /// Case-insensitive exact match on the category.
    pub ingredient_type: Option<String>,
}

#[async_trait]
pub trait IngredientQuery: Send + Sync {
    /// Every row, deleted or not, whose name matches one of `names`
    /// case-insensitively.
    async fn find_by_names(&self, names: &[String]) -> Result<Vec<Ingredient>, IngredientQueryError>;

    async fn find_live_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Ingredient>, IngredientQueryError>;

    async fn list(
        &self,
        filter: &IngredientListFilter,
        page: PageRequest,
    ) -> Result<(Vec<Ingredient>, u64), IngredientQueryError>;
}
