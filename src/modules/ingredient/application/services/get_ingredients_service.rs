use async_trait::async_trait;

use crate::modules::ingredient::application::domain::entities::Ingredient;
use crate::modules::ingredient::application::ports::{
    incoming::use_cases::{GetIngredientsError, GetIngredientsQuery, GetIngredientsUseCase},
    outgoing::IngredientQuery,
};
use crate::shared::pagination::Paginated;

#[derive(Debug, Clone)]
pub struct GetIngredientsService<Q>
where
    Q: IngredientQuery,
{
    query: Q,
}

impl<Q> GetIngredientsService<Q>
where
    Q: IngredientQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetIngredientsUseCase for GetIngredientsService<Q>
where
    Q: IngredientQuery,
{
    async fn execute(
        &self,
        query: GetIngredientsQuery,
    ) -> Result<Paginated<Ingredient>, GetIngredientsError> {
        let (data, total) = self
            .query
            .list(query.filter(), query.page())
            .await
            .map_err(|e| GetIngredientsError::QueryError(e.to_string()))?;

        Ok(Paginated {
            data,
            pagination: query.page().pagination(total),
        })
    }
}
