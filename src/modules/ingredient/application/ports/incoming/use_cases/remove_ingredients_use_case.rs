use async_trait::async_trait;

use crate::shared::catalog::IdList;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoveIngredientsError {
    #[error("No ingredient Ids provided")]
    NoIds,

    #[error("{0}")]
    NoneFound(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RemoveIngredientsUseCase: Send + Sync {
    async fn execute(&self, ids: IdList) -> Result<String, RemoveIngredientsError>;
}
