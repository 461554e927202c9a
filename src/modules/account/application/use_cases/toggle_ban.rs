use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::account::application::domain::entities::Account;
use crate::modules::account::application::ports::outgoing::{
    AccountQuery, AccountRepository, AccountRepositoryError,
};
use crate::modules::auth::application::ports::outgoing::RefreshTokenStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToggleBanError {
    #[error("Account is not found")]
    AccountNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IToggleBanUseCase: Send + Sync {
    /// Flips `is_banned` and returns the updated account.
    async fn execute(&self, account_id: Uuid) -> Result<Account, ToggleBanError>;
}

pub struct ToggleBanUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    query: Q,
    repository: R,
    refresh_tokens: Arc<dyn RefreshTokenStore>,
}

impl<Q, R> ToggleBanUseCase<Q, R>
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
impl<Q, R> IToggleBanUseCase for ToggleBanUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    async fn execute(&self, account_id: Uuid) -> Result<Account, ToggleBanError> {
        let account = self
            .query
            .find_by_id(account_id)
            .await
            .map_err(|e| ToggleBanError::RepositoryError(e.to_string()))?
            .ok_or(ToggleBanError::AccountNotFound)?;

        let updated = self
            .repository
            .set_banned(account.id, !account.is_banned)
            .await
            .map_err(|e| match e {
                AccountRepositoryError::NotFound => ToggleBanError::AccountNotFound,
                other => ToggleBanError::RepositoryError(other.to_string()),
            })?;

        if updated.is_banned {
            if let Err(e) = self.refresh_tokens.revoke(updated.id).await {
                tracing::warn!(account_id = %updated.id, "Could not revoke refresh token: {}", e);
            }
        }

        tracing::info!(account_id = %updated.id, banned = updated.is_banned, "Ban status changed");
        Ok(updated)
    }
}
