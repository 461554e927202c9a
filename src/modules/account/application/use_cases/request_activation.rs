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
pub struct RequestActivationCommand {
    email: String,
}

impl RequestActivationCommand {
    pub fn new(email: &str) -> Result<Self, AccountFieldError> {
        Ok(Self {
            email: fields::email(email)?,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl<'de> Deserialize<'de> for RequestActivationCommand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Helper {
            email: String,
        }

        let h = Helper::deserialize(deserializer)?;
        RequestActivationCommand::new(&h.email).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestActivationError {
    #[error("Account not found")]
    AccountNotFound,

    #[error("Account is already activated")]
    AlreadyActivated,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Issues a fresh activation code for an account that is not active yet.
#[async_trait]
pub trait IRequestActivationUseCase: Send + Sync {
    async fn execute(&self, command: RequestActivationCommand)
        -> Result<(), RequestActivationError>;
}

pub struct RequestActivationUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    query: Q,
    repository: R,
    credentials: Arc<dyn CredentialGenerator>,
    notifier: Arc<dyn AccountEmailNotifier>,
}

impl<Q, R> RequestActivationUseCase<Q, R>
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
impl<Q, R> IRequestActivationUseCase for RequestActivationUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    async fn execute(
        &self,
        command: RequestActivationCommand,
    ) -> Result<(), RequestActivationError> {
        let account = self
            .query
            .find_by_email(&command.email)
            .await
            .map_err(|e| RequestActivationError::RepositoryError(e.to_string()))?
            .ok_or(RequestActivationError::AccountNotFound)?;

        if account.is_active {
            return Err(RequestActivationError::AlreadyActivated);
        }

        let otp = OtpCode::issue(self.credentials.otp_code(), Utc::now());
        self.repository
            .set_otp(account.id, &otp)
            .await
            .map_err(|e| RequestActivationError::RepositoryError(e.to_string()))?;

        if let Err(e) = self
            .notifier
            .notify(AccountEmail::Activation {
                to: command.email,
                code: otp.code,
                expires_at: otp.expires_at,
            })
            .await
        {
            tracing::warn!(account_id = %account.id, "Could not schedule activation email: {}", e);
        }

        Ok(())
    }
}
