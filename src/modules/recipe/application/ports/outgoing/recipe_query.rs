use async_trait::async_trait;

use crate::modules::recipe::application::domain::entities::{RecipeFilter, RecipeView};
use crate::shared::pagination::PageRequest;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecipeQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RecipeQuery: Send + Sync {
    /// Live recipes, newest first, plus the total before paging.
    async fn list(
        &self,
        filter: &RecipeFilter,
        page: PageRequest,
    ) -> Result<(Vec<RecipeView>, u64), RecipeQueryError>;
}
