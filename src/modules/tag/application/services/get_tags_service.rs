use async_trait::async_trait;

use crate::modules::tag::application::domain::entities::Tag;
use crate::modules::tag::application::ports::{
    incoming::use_cases::{GetTagsError, GetTagsQuery, GetTagsUseCase},
    outgoing::TagQuery,
};
use crate::shared::pagination::Paginated;

#[derive(Debug, Clone)]
pub struct GetTagsService<Q>
where
    Q: TagQuery,
{
    query: Q,
}

impl<Q> GetTagsService<Q>
where
    Q: TagQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTagsUseCase for GetTagsService<Q>
where
    Q: TagQuery,
{
    async fn execute(&self, query: GetTagsQuery) -> Result<Paginated<Tag>, GetTagsError> {
        let (data, total) = self
            .query
            .list(query.keyword(), query.page())
            .await
            .map_err(|e| GetTagsError::QueryError(e.to_string()))?;

        Ok(Paginated {
            data,
            pagination: query.page().pagination(total),
        })
    }
}
