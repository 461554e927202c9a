use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::account::application::domain::entities::{AccountType, OtpCode, Role};
use crate::modules::account::application::domain::fields::{self, AccountFieldError};
use crate::modules::account::application::helpers::{ensure_identity_free, IdentityTaken};
use crate::modules::account::application::ports::outgoing::{
    AccountQuery, AccountRepository, AccountRepositoryError, CredentialGenerator, NewAccount,
    PasswordHasher,
};
use crate::modules::email::application::ports::outgoing::{AccountEmail, AccountEmailNotifier};

// ========================= Command =========================

/// Sign-up payload. Fields are validated on construction.
#[derive(Debug, Clone)]
pub struct RegisterAccountCommand {
    email: String,
    username: String,
    password: String,
    confirm_password: Option<String>,
    role: Role,
}

impl RegisterAccountCommand {
    pub fn new(
        email: &str,
        username: &str,
        password: &str,
        confirm_password: Option<String>,
        role: Option<&str>,
    ) -> Result<Self, AccountFieldError> {
        Ok(Self {
            email: fields::email(email)?,
            username: fields::username(username)?,
            password: fields::password(password)?,
            confirm_password,
            role: fields::role(role)?,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

impl<'de> Deserialize<'de> for RegisterAccountCommand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Helper {
            email: String,
            username: String,
            password: String,
            confirm_password: Option<String>,
            role: Option<String>,
        }

        let h = Helper::deserialize(deserializer)?;
        RegisterAccountCommand::new(
            &h.email,
            &h.username,
            &h.password,
            h.confirm_password,
            h.role.as_deref(),
        )
        .map_err(serde::de::Error::custom)
    }
}

// ========================= Error =========================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterAccountError {
    #[error("Email is already in use")]
    EmailAlreadyInUse,

    #[error("Username is already in use")]
    UsernameAlreadyInUse,

    #[error("Password and confirm password do not match")]
    PasswordMismatch,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ========================= Use case =========================

#[async_trait]
pub trait IRegisterAccountUseCase: Send + Sync {
    async fn execute(&self, command: RegisterAccountCommand) -> Result<Uuid, RegisterAccountError>;
}

pub struct RegisterAccountUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher>,
    credentials: Arc<dyn CredentialGenerator>,
    notifier: Arc<dyn AccountEmailNotifier>,
}

impl<Q, R> RegisterAccountUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        hasher: Arc<dyn PasswordHasher>,
        credentials: Arc<dyn CredentialGenerator>,
        notifier: Arc<dyn AccountEmailNotifier>,
    ) -> Self {
        Self {
            query,
            repository,
            hasher,
            credentials,
            notifier,
        }
    }
}

impl From<IdentityTaken> for RegisterAccountError {
    fn from(value: IdentityTaken) -> Self {
        match value {
            IdentityTaken::Email => RegisterAccountError::EmailAlreadyInUse,
            IdentityTaken::Username => RegisterAccountError::UsernameAlreadyInUse,
            IdentityTaken::RepositoryError(msg) => RegisterAccountError::RepositoryError(msg),
        }
    }
}

#[async_trait]
impl<Q, R> IRegisterAccountUseCase for RegisterAccountUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    async fn execute(&self, command: RegisterAccountCommand) -> Result<Uuid, RegisterAccountError> {
        if let Some(confirm) = &command.confirm_password {
            if confirm != &command.password {
                return Err(RegisterAccountError::PasswordMismatch);
            }
        }

        ensure_identity_free(&self.query, &command.email, &command.username).await?;

        let password_hash = self
            .hasher
            .hash_password(&command.password)
            .await
            .map_err(|e| RegisterAccountError::HashingFailed(e.to_string()))?;

        let otp = OtpCode::issue(self.credentials.otp_code(), Utc::now());

        let account = self
            .repository
            .create_with_profile(NewAccount {
                email: command.email.clone(),
                username: command.username.clone(),
                password_hash: Some(password_hash),
                role: command.role,
                account_type: AccountType::Local,
                is_active: false,
                otp: Some(otp.clone()),
                first_name: String::new(),
                last_name: String::new(),
                avatar_url: None,
            })
            .await
            .map_err(|e| match e {
                // Lost a race against a concurrent sign-up.
                AccountRepositoryError::AlreadyExists => RegisterAccountError::EmailAlreadyInUse,
                other => RegisterAccountError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(account_id = %account.id, email = %command.email, "Account registered");

        if let Err(e) = self
            .notifier
            .notify(AccountEmail::Registration {
                to: command.email,
                code: otp.code,
                expires_at: otp.expires_at,
            })
            .await
        {
            tracing::warn!(account_id = %account.id, "Could not schedule activation email: {}", e);
        }

        Ok(account.id)
    }
}
