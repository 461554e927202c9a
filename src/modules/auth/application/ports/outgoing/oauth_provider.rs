use async_trait::async_trait;

use crate::modules::account::application::use_cases::resolve_oauth_account::OAuthProfile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OAuthProviderError {
    #[error("Code exchange failed: {0}")]
    ExchangeFailed(String),

    #[error("Profile request failed: {0}")]
    ProfileFailed(String),
}

/// Third-party identity provider driving the authorization-code flow.
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// Consent page the browser is redirected to.
    fn authorization_url(&self) -> String;

    /// Trades the callback code for the signed-in user's profile.
    async fn fetch_profile(&self, code: &str) -> Result<OAuthProfile, OAuthProviderError>;
}
