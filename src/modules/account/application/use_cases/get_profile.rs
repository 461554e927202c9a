use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::account::application::ports::outgoing::{AccountProfileView, AccountQuery};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetProfileError {
    #[error("User information is not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IGetProfileUseCase: Send + Sync {
    async fn execute(&self, account_id: Uuid) -> Result<AccountProfileView, GetProfileError>;
}

pub struct GetProfileUseCase<Q>
where
    Q: AccountQuery,
{
    query: Q,
}

impl<Q> GetProfileUseCase<Q>
where
    Q: AccountQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetProfileUseCase for GetProfileUseCase<Q>
where
    Q: AccountQuery,
{
    async fn execute(&self, account_id: Uuid) -> Result<AccountProfileView, GetProfileError> {
        self.query
            .get_profile(account_id)
            .await
            .map_err(|e| GetProfileError::RepositoryError(e.to_string()))?
            .ok_or(GetProfileError::NotFound)
    }
}
