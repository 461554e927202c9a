use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::recipe::application::domain::entities::CreatedRecipe;
use crate::modules::recipe::application::ports::{
    incoming::use_cases::{CreateRecipeCommand, CreateRecipeError, CreateRecipeUseCase},
    outgoing::{RecipeRepository, RecipeRepositoryError},
};
use crate::shared::catalog::join_ids;

#[derive(Debug, Clone)]
pub struct CreateRecipeService<R>
where
    R: RecipeRepository,
{
    repository: R,
}

impl<R> CreateRecipeService<R>
where
    R: RecipeRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateRecipeUseCase for CreateRecipeService<R>
where
    R: RecipeRepository,
{
    async fn execute(
        &self,
        creator_id: Uuid,
        command: CreateRecipeCommand,
    ) -> Result<CreatedRecipe, CreateRecipeError> {
        let created = self
            .repository
            .create_with_associations(command.into_new_recipe(creator_id))
            .await
            .map_err(|e| match e {
                RecipeRepositoryError::IngredientsNotFound(ids) => {
                    CreateRecipeError::IngredientsNotFound(join_ids(&ids))
                }
                RecipeRepositoryError::TagsNotFound(ids) => {
                    CreateRecipeError::TagsNotFound(join_ids(&ids))
                }
                RecipeRepositoryError::DatabaseError(msg) => CreateRecipeError::RepositoryError(msg),
            })?;

        tracing::info!(recipe_id = %created.id, creator_id = %creator_id, "Recipe created");
        Ok(created)
    }
}
