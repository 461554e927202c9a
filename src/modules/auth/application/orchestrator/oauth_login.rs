use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::account::application::use_cases::resolve_oauth_account::{
    IResolveOAuthAccountUseCase, ResolveOAuthAccountError,
};
use crate::modules::auth::application::domain::entities::LoginSession;
use crate::modules::auth::application::ports::outgoing::{OAuthProvider, OAuthProviderError};
use crate::modules::auth::application::services::SessionService;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OAuthLoginError {
    #[error(transparent)]
    Provider(#[from] OAuthProviderError),

    #[error(transparent)]
    Resolve(#[from] ResolveOAuthAccountError),

    #[error("Account is banned")]
    AccountBanned,

    #[error("Session error: {0}")]
    SessionFailed(String),
}

#[async_trait]
pub trait IOAuthLogin: Send + Sync {
    fn authorization_url(&self) -> String;

    async fn login(&self, code: &str) -> Result<LoginSession, OAuthLoginError>;
}

/// Provider callback to signed-in session: fetch profile, resolve or
/// create the account, then open a session for it.
#[derive(Clone)]
pub struct OAuthLoginOrchestrator {
    provider: Arc<dyn OAuthProvider>,
    resolve: Arc<dyn IResolveOAuthAccountUseCase + Send + Sync>,
    sessions: SessionService,
}

impl OAuthLoginOrchestrator {
    pub fn new(
        provider: Arc<dyn OAuthProvider>,
        resolve: Arc<dyn IResolveOAuthAccountUseCase + Send + Sync>,
        sessions: SessionService,
    ) -> Self {
        Self {
            provider,
            resolve,
            sessions,
        }
    }
}

#[async_trait]
impl IOAuthLogin for OAuthLoginOrchestrator {
    fn authorization_url(&self) -> String {
        self.provider.authorization_url()
    }

    async fn login(&self, code: &str) -> Result<LoginSession, OAuthLoginError> {
        let profile = self.provider.fetch_profile(code).await?;
        let account = self.resolve.execute(profile).await?;

        if account.is_banned {
            tracing::warn!(account_id = %account.id, "Banned account tried OAuth login");
            return Err(OAuthLoginError::AccountBanned);
        }

        let session = self
            .sessions
            .open(&account)
            .await
            .map_err(|e| OAuthLoginError::SessionFailed(e.to_string()))?;

        tracing::info!(account_id = %account.id, "Account logged in through OAuth");
        Ok(session)
    }
}
