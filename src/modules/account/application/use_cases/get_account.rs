use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::account::application::ports::outgoing::{AccountListItem, AccountQuery};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetAccountError {
    #[error("Account is not found or has been deleted")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IGetAccountUseCase: Send + Sync {
    async fn execute(&self, account_id: Uuid) -> Result<AccountListItem, GetAccountError>;
}

/// Staff view of a single account; soft-deleted accounts stay visible.
pub struct GetAccountUseCase<Q>
where
    Q: AccountQuery,
{
    query: Q,
}

impl<Q> GetAccountUseCase<Q>
where
    Q: AccountQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetAccountUseCase for GetAccountUseCase<Q>
where
    Q: AccountQuery,
{
    async fn execute(&self, account_id: Uuid) -> Result<AccountListItem, GetAccountError> {
        self.query
            .get_detail(account_id)
            .await
            .map_err(|e| GetAccountError::RepositoryError(e.to_string()))?
            .ok_or(GetAccountError::NotFound)
    }
}
