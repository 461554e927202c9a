use async_trait::async_trait;

use crate::shared::catalog::IdList;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoveTagsError {
    #[error("No tag Ids provided")]
    NoIds,

    #[error("{0}")]
    NoneFound(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RemoveTagsUseCase: Send + Sync {
    /// Soft-deletes the live tags among `ids`; returns the summary message.
    async fn execute(&self, ids: IdList) -> Result<String, RemoveTagsError>;
}
