use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::recipe::application::domain::entities::{CreatedRecipe, NewRecipe};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecipeRepositoryError {
    #[error("Ingredients not found")]
    IngredientsNotFound(Vec<Uuid>),

    #[error("Tags not found")]
    TagsNotFound(Vec<Uuid>),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Writes the recipe with its ingredient and tag rows in one
    /// transaction. Any unknown or deleted ingredient or tag id rolls
    /// everything back.
    async fn create_with_associations(
        &self,
        recipe: NewRecipe,
    ) -> Result<CreatedRecipe, RecipeRepositoryError>;
}
