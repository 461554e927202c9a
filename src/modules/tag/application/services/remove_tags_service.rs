use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::tag::application::ports::{
    incoming::use_cases::{RemoveTagsError, RemoveTagsUseCase},
    outgoing::{TagQuery, TagRepository},
};
use crate::shared::catalog::{IdList, TAG_NOUN};

#[derive(Debug, Clone)]
pub struct RemoveTagsService<Q, R>
where
    Q: TagQuery,
    R: TagRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> RemoveTagsService<Q, R>
where
    Q: TagQuery,
    R: TagRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> RemoveTagsUseCase for RemoveTagsService<Q, R>
where
    Q: TagQuery,
    R: TagRepository,
{
    async fn execute(&self, ids: IdList) -> Result<String, RemoveTagsError> {
        if ids.is_empty() {
            return Err(RemoveTagsError::NoIds);
        }

        let found: Vec<Uuid> = self
            .query
            .find_live_by_ids(ids.as_slice())
            .await
            .map_err(|e| RemoveTagsError::RepositoryError(e.to_string()))?
            .into_iter()
            .map(|t| t.id)
            .collect();

        if found.is_empty() {
            return Err(RemoveTagsError::NoneFound(
                TAG_NOUN.none_found(ids.as_slice()),
            ));
        }

        let removed = self
            .repository
            .soft_delete_many(&found)
            .await
            .map_err(|e| RemoveTagsError::RepositoryError(e.to_string()))?;

        tracing::info!(removed, "Tags soft-deleted");
        Ok(TAG_NOUN.removed_summary(removed as usize, &ids.missing_from(&found)))
    }
}
