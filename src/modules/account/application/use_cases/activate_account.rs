use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use crate::modules::account::application::domain::entities::{Account, OtpCheck};
use crate::modules::account::application::domain::fields::{self, AccountFieldError};
use crate::modules::account::application::ports::outgoing::{AccountQuery, AccountRepository};

#[derive(Debug, Clone)]
pub struct ActivateAccountCommand {
    id: Uuid,
    code: String,
}

impl ActivateAccountCommand {
    pub fn new(id: Uuid, code: &str) -> Result<Self, AccountFieldError> {
        Ok(Self {
            id,
            code: fields::otp_code(code)?,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl<'de> Deserialize<'de> for ActivateAccountCommand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Helper {
            id: Uuid,
            code: String,
        }

        let h = Helper::deserialize(deserializer)?;
        ActivateAccountCommand::new(h.id, &h.code).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivateAccountError {
    #[error("OTP is expired or not correct")]
    InvalidOrExpiredCode,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IActivateAccountUseCase: Send + Sync {
    async fn execute(&self, command: ActivateAccountCommand)
        -> Result<Account, ActivateAccountError>;
}

pub struct ActivateAccountUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> ActivateAccountUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IActivateAccountUseCase for ActivateAccountUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    async fn execute(
        &self,
        command: ActivateAccountCommand,
    ) -> Result<Account, ActivateAccountError> {
        let account = self
            .query
            .find_by_id(command.id)
            .await
            .map_err(|e| ActivateAccountError::RepositoryError(e.to_string()))?
            .ok_or(ActivateAccountError::InvalidOrExpiredCode)?;

        if account.check_otp(&command.code, Utc::now()) != OtpCheck::Valid {
            return Err(ActivateAccountError::InvalidOrExpiredCode);
        }

        let activated = self
            .repository
            .activate(account.id)
            .await
            .map_err(|e| ActivateAccountError::RepositoryError(e.to_string()))?;

        tracing::info!(account_id = %activated.id, "Account activated");
        Ok(activated)
    }
}
