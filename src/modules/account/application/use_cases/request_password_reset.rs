use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;

use crate::modules::account::application::domain::entities::OtpCode;
use crate::modules::account::application::domain::fields::{self, AccountFieldError};
use crate::modules::account::application::ports::outgoing::{
    AccountQuery, AccountRepository, CredentialGenerator,
};
use crate::modules::email::application::ports::outgoing::{AccountEmail, AccountEmailNotifier};

#[derive(Debug, Clone)]
pub struct RequestPasswordResetCommand {
    email: String,
}

impl RequestPasswordResetCommand {
    pub fn new(email: &str) -> Result<Self, AccountFieldError> {
        Ok(Self {
            email: fields::email(email)?,
        })
    }
}

impl<'de> Deserialize<'de> for RequestPasswordResetCommand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Helper {
            email: String,
        }

        let h = Helper::deserialize(deserializer)?;
        RequestPasswordResetCommand::new(&h.email).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestPasswordResetError {
    #[error("Account not found")]
    AccountNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IRequestPasswordResetUseCase: Send + Sync {
    async fn execute(
        &self,
        command: RequestPasswordResetCommand,
    ) -> Result<(), RequestPasswordResetError>;
}

pub struct RequestPasswordResetUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    query: Q,
    repository: R,
    credentials: Arc<dyn CredentialGenerator>,
    notifier: Arc<dyn AccountEmailNotifier>,
}

impl<Q, R> RequestPasswordResetUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        credentials: Arc<dyn CredentialGenerator>,
        notifier: Arc<dyn AccountEmailNotifier>,
    ) -> Self {
        Self {
            query,
            repository,
            credentials,
            notifier,
        }
    }
}

#[async_trait]
impl<Q, R> IRequestPasswordResetUseCase for RequestPasswordResetUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    async fn execute(
        &self,
        command: RequestPasswordResetCommand,
    ) -> Result<(), RequestPasswordResetError> {
        let account = self
            .query
            .find_by_email(&command.email)
            .await
            .map_err(|e| RequestPasswordResetError::RepositoryError(e.to_string()))?
            .ok_or(RequestPasswordResetError::AccountNotFound)?;

        let otp = OtpCode::issue(self.credentials.otp_code(), Utc::now());
        self.repository
            .set_otp(account.id, &otp)
            .await
            .map_err(|e| RequestPasswordResetError::RepositoryError(e.to_string()))?;

        if let Err(e) = self
            .notifier
            .notify(AccountEmail::PasswordReset {
                to: command.email,
                code: otp.code,
            })
            .await
        {
            tracing::warn!(account_id = %account.id, "Could not schedule reset email: {}", e);
        }

        Ok(())
    }
}
