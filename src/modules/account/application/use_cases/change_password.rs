use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::account::application::domain::fields::{self, AccountFieldError};
use crate::modules::account::application::ports::outgoing::{
    AccountQuery, AccountRepository, PasswordHasher,
};

#[derive(Debug, Clone)]
pub struct ChangePasswordCommand {
    old_password: String,
    new_password: String,
    confirm_password: String,
}

impl ChangePasswordCommand {
    pub fn new(
        old_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<Self, AccountFieldError> {
        Ok(Self {
            old_password: fields::non_empty(old_password, "Old password")?,
            new_password: fields::password(new_password)?,
            confirm_password: confirm_password.to_string(),
        })
    }
}

impl<'de> Deserialize<'de> for ChangePasswordCommand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Helper {
            old_password: String,
            new_password: String,
            confirm_password: String,
        }

        let h = Helper::deserialize(deserializer)?;
        ChangePasswordCommand::new(&h.old_password, &h.new_password, &h.confirm_password)
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("Account is not found")]
    AccountNotFound,

    #[error("Account is not active")]
    AccountNotActive,

    #[error("Old password is incorrect")]
    OldPasswordIncorrect,

    #[error("Password and confirm password do not match")]
    PasswordMismatch,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IChangePasswordUseCase: Send + Sync {
    async fn execute(
        &self,
        account_id: Uuid,
        command: ChangePasswordCommand,
    ) -> Result<(), ChangePasswordError>;
}

pub struct ChangePasswordUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> ChangePasswordUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    pub fn new(query: Q, repository: R, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            hasher,
        }
    }
}

#[async_trait]
impl<Q, R> IChangePasswordUseCase for ChangePasswordUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    async fn execute(
        &self,
        account_id: Uuid,
        command: ChangePasswordCommand,
    ) -> Result<(), ChangePasswordError> {
        let account = self
            .query
            .find_by_id(account_id)
            .await
            .map_err(|e| ChangePasswordError::RepositoryError(e.to_string()))?
            .ok_or(ChangePasswordError::AccountNotFound)?;

        if !account.is_active {
            return Err(ChangePasswordError::AccountNotActive);
        }

        // OAuth accounts have no password to match.
        let stored = account
            .password_hash
            .as_deref()
            .ok_or(ChangePasswordError::OldPasswordIncorrect)?;

        let matches = self
            .hasher
            .verify_password(&command.old_password, stored)
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;
        if !matches {
            return Err(ChangePasswordError::OldPasswordIncorrect);
        }

        if command.new_password != command.confirm_password {
            return Err(ChangePasswordError::PasswordMismatch);
        }

        let hash = self
            .hasher
            .hash_password(&command.new_password)
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;

        self.repository
            .change_password(account.id, &hash)
            .await
            .map_err(|e| ChangePasswordError::RepositoryError(e.to_string()))?;

        tracing::info!(account_id = %account.id, "Password changed");
        Ok(())
    }
}
