use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::account::application::domain::entities::{AccountType, Role};
use crate::modules::account::application::domain::fields::{self, AccountFieldError};
use crate::modules::account::application::helpers::{ensure_identity_free, IdentityTaken};
use crate::modules::account::application::ports::outgoing::{
    AccountQuery, AccountRepository, AccountRepositoryError, CredentialGenerator, NewAccount,
    PasswordHasher,
};
use crate::modules::email::application::ports::outgoing::{AccountEmail, AccountEmailNotifier};

const GENERATED_PASSWORD_LENGTH: usize = 12;

/// Account created by an administrator. The password is generated.
#[derive(Debug, Clone)]
pub struct CreateAccountCommand {
    email: String,
    username: String,
    role: Role,
}

impl CreateAccountCommand {
    pub fn new(email: &str, username: &str, role: Option<&str>) -> Result<Self, AccountFieldError> {
        Ok(Self {
            email: fields::email(email)?,
            username: fields::username(username)?,
            role: fields::role(role)?,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl<'de> Deserialize<'de> for CreateAccountCommand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Helper {
            email: String,
            username: String,
            role: Option<String>,
        }

        let h = Helper::deserialize(deserializer)?;
        CreateAccountCommand::new(&h.email, &h.username, h.role.as_deref())
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateAccountError {
    #[error("Email is already in use")]
    EmailAlreadyInUse,

    #[error("Username is already in use")]
    UsernameAlreadyInUse,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<IdentityTaken> for CreateAccountError {
    fn from(value: IdentityTaken) -> Self {
        match value {
            IdentityTaken::Email => CreateAccountError::EmailAlreadyInUse,
            IdentityTaken::Username => CreateAccountError::UsernameAlreadyInUse,
            IdentityTaken::RepositoryError(msg) => CreateAccountError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait ICreateAccountUseCase: Send + Sync {
    async fn execute(&self, command: CreateAccountCommand) -> Result<Uuid, CreateAccountError>;
}

pub struct CreateAccountUseCase<Q, R>
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

impl<Q, R> CreateAccountUseCase<Q, R>
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

#[async_trait]
impl<Q, R> ICreateAccountUseCase for CreateAccountUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    async fn execute(&self, command: CreateAccountCommand) -> Result<Uuid, CreateAccountError> {
        ensure_identity_free(&self.query, &command.email, &command.username).await?;

        let password = self.credentials.password(GENERATED_PASSWORD_LENGTH);
        let password_hash = self
            .hasher
            .hash_password(&password)
            .await
            .map_err(|e| CreateAccountError::HashingFailed(e.to_string()))?;

        let account = self
            .repository
            .create_with_profile(NewAccount {
                email: command.email.clone(),
                username: command.username.clone(),
                password_hash: Some(password_hash),
                role: command.role,
                account_type: AccountType::Local,
                is_active: true,
                otp: None,
                first_name: String::new(),
                last_name: String::new(),
                avatar_url: None,
            })
            .await
            .map_err(|e| match e {
                AccountRepositoryError::AlreadyExists => CreateAccountError::EmailAlreadyInUse,
                other => CreateAccountError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(account_id = %account.id, role = %command.role, "Account created by administrator");

        if let Err(e) = self
            .notifier
            .notify(AccountEmail::Welcome {
                to: command.email,
                username: command.username,
                password,
            })
            .await
        {
            tracing::warn!(account_id = %account.id, "Could not schedule welcome email: {}", e);
        }

        Ok(account.id)
    }
}
