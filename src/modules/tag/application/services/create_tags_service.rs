use async_trait::async_trait;

use crate::modules::tag::application::ports::{
    incoming::use_cases::{CreateTagsCommand, CreateTagsError, CreateTagsOutcome, CreateTagsUseCase},
    outgoing::{TagQuery, TagRepository, TagRepositoryError},
};
use crate::shared::catalog::{dedupe_by_name, plan_bulk_upsert, CatalogRow, TAG_NOUN};

#[derive(Debug, Clone)]
pub struct CreateTagsService<Q, R>
where
    Q: TagQuery,
    R: TagRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateTagsService<Q, R>
where
    Q: TagQuery,
    R: TagRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateTagsUseCase for CreateTagsService<Q, R>
where
    Q: TagQuery,
    R: TagRepository,
{
    async fn execute(
        &self,
        command: CreateTagsCommand,
    ) -> Result<CreateTagsOutcome, CreateTagsError> {
        let inputs = dedupe_by_name(command.into_names());
        let names: Vec<String> = inputs.iter().map(|n| n.as_str().to_string()).collect();

        let existing = self
            .query
            .find_by_names(&names)
            .await
            .map_err(|e| CreateTagsError::RepositoryError(e.to_string()))?;

        let plan = plan_bulk_upsert(inputs, existing);
        let blocked = plan.blocked_names();

        if plan.to_create.is_empty() && plan.to_restore.is_empty() {
            return Err(CreateTagsError::NothingCreated {
                message: TAG_NOUN.nothing_created(&blocked),
                existing: plan.blocked,
            });
        }

        let new_names = plan
            .to_create
            .iter()
            .map(|n| n.as_str().to_string())
            .collect();
        let restore_ids = plan.to_restore.iter().map(|(row, _)| row.id()).collect();

        let saved = self
            .repository
            .create_and_restore(new_names, restore_ids)
            .await
            .map_err(|e| match e {
                TagRepositoryError::AlreadyExists => CreateTagsError::Conflict,
                other => CreateTagsError::RepositoryError(other.to_string()),
            })?;

        let message = TAG_NOUN.created_summary(saved.created.len(), saved.restored.len(), &blocked);
        tracing::info!(
            created = saved.created.len(),
            restored = saved.restored.len(),
            blocked = blocked.len(),
            "Tags saved"
        );

        Ok(CreateTagsOutcome {
            message,
            tags: saved.into_rows(),
        })
    }
}
