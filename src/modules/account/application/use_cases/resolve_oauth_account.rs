use async_trait::async_trait;
use chrono::Utc;

use crate::modules::account::application::domain::entities::{Account, AccountType, Role};
use crate::modules::account::application::ports::outgoing::{
    AccountQuery, AccountRepository, NewAccount,
};

/// Identity returned by an external provider after consent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthProfile {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveOAuthAccountError {
    #[error("Provider did not return an email")]
    MissingEmail,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IResolveOAuthAccountUseCase: Send + Sync {
    /// Returns the account owning the profile's email, creating it first if needed.
    async fn execute(&self, profile: OAuthProfile) -> Result<Account, ResolveOAuthAccountError>;
}

pub struct ResolveOAuthAccountUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> ResolveOAuthAccountUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }

    /// Local part of the email, or a timestamp name when that is taken.
    async fn derive_username(&self, email: &str) -> Result<String, ResolveOAuthAccountError> {
        let local = email.split('@').next().unwrap_or_default();
        if !local.is_empty() {
            let taken = self
                .query
                .find_by_username(local)
                .await
                .map_err(|e| ResolveOAuthAccountError::RepositoryError(e.to_string()))?;
            if taken.is_none() {
                return Ok(local.to_string());
            }
        }
        Ok(format!("user{}", Utc::now().timestamp_millis()))
    }
}

#[async_trait]
impl<Q, R> IResolveOAuthAccountUseCase for ResolveOAuthAccountUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    async fn execute(&self, profile: OAuthProfile) -> Result<Account, ResolveOAuthAccountError> {
        let email = profile.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(ResolveOAuthAccountError::MissingEmail);
        }

        if let Some(existing) = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| ResolveOAuthAccountError::RepositoryError(e.to_string()))?
        {
            return Ok(existing);
        }

        let username = self.derive_username(&email).await?;

        let account = self
            .repository
            .create_with_profile(NewAccount {
                email: email.clone(),
                username,
                password_hash: None,
                role: Role::User,
                account_type: AccountType::Google,
                is_active: true,
                otp: None,
                first_name: profile.first_name,
                last_name: profile.last_name,
                avatar_url: profile.avatar_url,
            })
            .await
            .map_err(|e| ResolveOAuthAccountError::RepositoryError(e.to_string()))?;

        tracing::info!(account_id = %account.id, email = %email, "Account created from Google login");
        Ok(account)
    }
}
