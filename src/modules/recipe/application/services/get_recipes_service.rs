use async_trait::async_trait;

use crate::modules::recipe::application::domain::entities::RecipeView;
use crate::modules::recipe::application::ports::{
    incoming::use_cases::{GetRecipesError, GetRecipesQuery, GetRecipesUseCase},
    outgoing::RecipeQuery,
};
use crate::shared::pagination::Paginated;

#[derive(Debug, Clone)]
pub struct GetRecipesService<Q>
where
    Q: RecipeQuery,
{
    query: Q,
}

impl<Q> GetRecipesService<Q>
where
    Q: RecipeQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetRecipesUseCase for GetRecipesService<Q>
where
    Q: RecipeQuery,
{
    async fn execute(
        &self,
        query: GetRecipesQuery,
    ) -> Result<Paginated<RecipeView>, GetRecipesError> {
        let (data, total) = self
            .query
            .list(query.filter(), query.page())
            .await
            .map_err(|e| GetRecipesError::QueryError(e.to_string()))?;

        Ok(Paginated {
            data,
            pagination: query.page().pagination(total),
        })
    }
}
