use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;

use crate::modules::account::application::domain::entities::Account;
use crate::modules::account::application::domain::fields::{self, AccountFieldError};
use crate::modules::account::application::ports::outgoing::{AccountQuery, PasswordHasher};
use crate::modules::auth::application::domain::entities::LoginSession;
use crate::modules::auth::application::services::SessionService;

/// Email or username plus password.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    login_key: String,
    password: String,
}

impl LoginCommand {
    pub fn new(login_key: &str, password: &str) -> Result<Self, AccountFieldError> {
        Ok(Self {
            login_key: fields::non_empty(login_key, "Login key")?,
            password: fields::non_empty(password, "Password")?,
        })
    }

    pub fn login_key(&self) -> &str {
        &self.login_key
    }

    fn is_email(&self) -> bool {
        self.login_key.contains('@')
    }
}

impl<'de> Deserialize<'de> for LoginCommand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Helper {
            login_key: String,
            password: String,
        }

        let h = Helper::deserialize(deserializer)?;
        LoginCommand::new(&h.login_key, &h.password).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Wrong email/username or password")]
    InvalidCredentials,

    #[error("Account is not activate")]
    AccountNotActive,

    #[error("Account is banned")]
    AccountBanned,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Session error: {0}")]
    SessionError(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ILoginUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<LoginSession, LoginError>;
}

pub struct LoginUseCase<Q>
where
    Q: AccountQuery,
{
    query: Q,
    hasher: Arc<dyn PasswordHasher>,
    sessions: SessionService,
}

impl<Q> LoginUseCase<Q>
where
    Q: AccountQuery,
{
    pub fn new(query: Q, hasher: Arc<dyn PasswordHasher>, sessions: SessionService) -> Self {
        Self {
            query,
            hasher,
            sessions,
        }
    }

    async fn find_account(&self, command: &LoginCommand) -> Result<Option<Account>, LoginError> {
        let found = if command.is_email() {
            self.query
                .find_by_email(&command.login_key.to_lowercase())
                .await
        } else {
            self.query.find_by_username(&command.login_key).await
        };
        found.map_err(|e| LoginError::QueryError(e.to_string()))
    }
}

#[async_trait]
impl<Q> ILoginUseCase for LoginUseCase<Q>
where
    Q: AccountQuery,
{
    async fn execute(&self, command: LoginCommand) -> Result<LoginSession, LoginError> {
        let account = self
            .find_account(&command)
            .await?
            .ok_or(LoginError::InvalidCredentials)?;

        // OAuth-only accounts have no password and can never log in locally.
        let hash = account
            .password_hash
            .as_deref()
            .ok_or(LoginError::InvalidCredentials)?;

        let matches = self
            .hasher
            .verify_password(&command.password, hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;
        if !matches {
            return Err(LoginError::InvalidCredentials);
        }

        if !account.is_active {
            return Err(LoginError::AccountNotActive);
        }
        if account.is_banned {
            return Err(LoginError::AccountBanned);
        }

        let session = self
            .sessions
            .open(&account)
            .await
            .map_err(|e| LoginError::SessionError(e.to_string()))?;

        tracing::info!(account_id = %account.id, "Account logged in");
        Ok(session)
    }
}
