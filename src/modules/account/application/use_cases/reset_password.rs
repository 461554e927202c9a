use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;

use crate::modules::account::application::domain::entities::OtpCheck;
use crate::modules::account::application::domain::fields::{self, AccountFieldError};
use crate::modules::account::application::ports::outgoing::{
    AccountQuery, AccountRepository, PasswordHasher,
};

#[derive(Debug, Clone)]
pub struct ResetPasswordCommand {
    email: String,
    code: String,
    password: String,
    confirm_password: String,
}

impl ResetPasswordCommand {
    pub fn new(
        email: &str,
        code: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Self, AccountFieldError> {
        Ok(Self {
            email: fields::email(email)?,
            code: fields::otp_code(code)?,
            password: fields::password(password)?,
            confirm_password: confirm_password.to_string(),
        })
    }
}

impl<'de> Deserialize<'de> for ResetPasswordCommand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Helper {
            email: String,
            code: String,
            password: String,
            confirm_password: String,
        }

        let h = Helper::deserialize(deserializer)?;
        ResetPasswordCommand::new(&h.email, &h.code, &h.password, &h.confirm_password)
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("Password and confirm password do not match")]
    PasswordMismatch,

    #[error("Account is not found")]
    AccountNotFound,

    #[error("The code is expired")]
    CodeExpired,

    #[error("The code is not correct")]
    CodeIncorrect,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IResetPasswordUseCase: Send + Sync {
    async fn execute(&self, command: ResetPasswordCommand) -> Result<(), ResetPasswordError>;
}

pub struct ResetPasswordUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> ResetPasswordUseCase<Q, R>
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
impl<Q, R> IResetPasswordUseCase for ResetPasswordUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    async fn execute(&self, command: ResetPasswordCommand) -> Result<(), ResetPasswordError> {
        if command.password != command.confirm_password {
            return Err(ResetPasswordError::PasswordMismatch);
        }

        let account = self
            .query
            .find_by_email(&command.email)
            .await
            .map_err(|e| ResetPasswordError::RepositoryError(e.to_string()))?
            .ok_or(ResetPasswordError::AccountNotFound)?;

        match account.check_otp(&command.code, Utc::now()) {
            OtpCheck::Valid => {}
            OtpCheck::Missing | OtpCheck::Expired => return Err(ResetPasswordError::CodeExpired),
            OtpCheck::Mismatch => return Err(ResetPasswordError::CodeIncorrect),
        }

        let hash = self
            .hasher
            .hash_password(&command.password)
            .await
            .map_err(|e| ResetPasswordError::HashingFailed(e.to_string()))?;

        self.repository
            .reset_password(account.id, &hash)
            .await
            .map_err(|e| ResetPasswordError::RepositoryError(e.to_string()))?;

        tracing::info!(account_id = %account.id, "Password reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::account_fixtures::{
        pending_account, InMemoryAccountStore, StubHasher,
    };

    fn use_case(
        store: &InMemoryAccountStore,
    ) -> ResetPasswordUseCase<InMemoryAccountStore, InMemoryAccountStore> {
        ResetPasswordUseCase::new(store.clone(), store.clone(), Arc::new(StubHasher::default()))
    }

    fn command(code: &str, password: &str, confirm: &str) -> ResetPasswordCommand {
        ResetPasswordCommand::new("cook@example.com", code, password, confirm).unwrap()
    }

    #[tokio::test]
    async fn valid_code_replaces_hash_and_clears_code() {
        let pending = pending_account("123456", 120);
        let store = InMemoryAccountStore::new().with_account(pending.clone());

        use_case(&store)
            .execute(command("123456", "Fresh@456", "Fresh@456"))
            .await
            .unwrap();

        let stored = store.get(pending.id).unwrap();
        assert_eq!(stored.password_hash.as_deref(), Some("hashed:Fresh@456"));
        assert!(stored.code_id.is_none());
        assert!(stored.code_expired.is_none());
    }

    #[tokio::test]
    async fn mismatch_is_checked_first() {
        let result = use_case(&InMemoryAccountStore::new())
            .execute(command("123456", "Fresh@456", "Fresh@457"))
            .await;

        assert_eq!(result, Err(ResetPasswordError::PasswordMismatch));
    }

    #[tokio::test]
    async fn unknown_email_is_not_found() {
        let result = use_case(&InMemoryAccountStore::new())
            .execute(command("123456", "Fresh@456", "Fresh@456"))
            .await;

        assert_eq!(result, Err(ResetPasswordError::AccountNotFound));
    }

    #[tokio::test]
    async fn expired_code_is_rejected() {
        let store = InMemoryAccountStore::new().with_account(pending_account("123456", -1));

        let result = use_case(&store)
            .execute(command("123456", "Fresh@456", "Fresh@456"))
            .await;

        assert_eq!(result, Err(ResetPasswordError::CodeExpired));
    }

    #[tokio::test]
    async fn wrong_code_is_rejected() {
        let store = InMemoryAccountStore::new().with_account(pending_account("123456", 120));

        let result = use_case(&store)
            .execute(command("000000", "Fresh@456", "Fresh@456"))
            .await;

        assert_eq!(result, Err(ResetPasswordError::CodeIncorrect));
    }
}
