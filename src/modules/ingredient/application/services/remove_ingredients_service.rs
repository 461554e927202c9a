use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::ingredient::application::ports::{
    incoming::use_cases::{RemoveIngredientsError, RemoveIngredientsUseCase},
    outgoing::{IngredientQuery, IngredientRepository},
};
use crate::shared::catalog::{IdList, INGREDIENT_NOUN};

#[derive(Debug, Clone)]
pub struct RemoveIngredientsService<Q, R>
where
    Q: IngredientQuery,
    R: IngredientRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> RemoveIngredientsService<Q, R>
where
    Q: IngredientQuery,
    R: IngredientRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> RemoveIngredientsUseCase for RemoveIngredientsService<Q, R>
where
    Q: IngredientQuery,
    R: IngredientRepository,
{
    async fn execute(&self, ids: IdList) -> Result<String, RemoveIngredientsError> {
        if ids.is_empty() {
            return Err(RemoveIngredientsError::NoIds);
        }

        let found: Vec<Uuid> = self
            .query
            .find_live_by_ids(ids.as_slice())
            .await
            .map_err(|e| RemoveIngredientsError::RepositoryError(e.to_string()))?
            .into_iter()
            .map(|i| i.id)
            .collect();

        if found.is_empty() {
            return Err(RemoveIngredientsError::NoneFound(
                INGREDIENT_NOUN.none_found(ids.as_slice()),
            ));
        }

        let removed = self
            .repository
            .soft_delete_many(&found)
            .await
            .map_err(|e| RemoveIngredientsError::RepositoryError(e.to_string()))?;

        tracing::info!(removed, "Ingredients soft-deleted");
        Ok(INGREDIENT_NOUN.removed_summary(removed as usize, &ids.missing_from(&found)))
    }
}
