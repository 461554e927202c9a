use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::account::application::ports::outgoing::{
    AccountQuery, AccountRepository, AccountRepositoryError,
};
use crate::modules::auth::application::ports::outgoing::RefreshTokenStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteAccountError {
    #[error("Account is not found")]
    AccountNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteAccountUseCase: Send + Sync {
    async fn execute(&self, account_id: Uuid) -> Result<(), DeleteAccountError>;
}

pub struct DeleteAccountUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    query: Q,
    repository: R,
    refresh_tokens: Arc<dyn RefreshTokenStore>,
}

impl<Q, R> DeleteAccountUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    pub fn new(query: Q, repository: R, refresh_tokens: Arc<dyn RefreshTokenStore>) -> Self {
        Self {
            query,
            repository,
            refresh_tokens,
        }
    }
}

#[async_trait]
impl<Q, R> IDeleteAccountUseCase for DeleteAccountUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    async fn execute(&self, account_id: Uuid) -> Result<(), DeleteAccountError> {
        self.query
            .find_by_id(account_id)
            .await
            .map_err(|e| DeleteAccountError::RepositoryError(e.to_string()))?
            .ok_or(DeleteAccountError::AccountNotFound)?;

        self.repository
            .soft_delete(account_id)
            .await
            .map_err(|e| match e {
                AccountRepositoryError::NotFound => DeleteAccountError::AccountNotFound,
                other => DeleteAccountError::RepositoryError(other.to_string()),
            })?;

        if let Err(e) = self.refresh_tokens.revoke(account_id).await {
            tracing::warn!(account_id = %account_id, "Could not revoke refresh token: {}", e);
        }

        tracing::info!(account_id = %account_id, "Account soft-deleted");
        Ok(())
    }
}
