use async_trait::async_trait;
use serde::{Deserialize, Deserializer};

use crate::modules::account::application::domain::fields::{self, AccountFieldError};
use crate::modules::auth::application::domain::entities::RefreshedAccess;
use crate::modules::auth::application::ports::outgoing::TokenKind;
use crate::modules::auth::application::services::SessionService;

#[derive(Debug, Clone)]
pub struct RefreshSessionCommand {
    refresh_token: String,
}

impl RefreshSessionCommand {
    pub fn new(refresh_token: &str) -> Result<Self, AccountFieldError> {
        Ok(Self {
            refresh_token: fields::non_empty(refresh_token, "Refresh token")?,
        })
    }
}

impl<'de> Deserialize<'de> for RefreshSessionCommand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Helper {
            refresh_token: String,
        }

        let h = Helper::deserialize(deserializer)?;
        RefreshSessionCommand::new(&h.refresh_token).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefreshSessionError {
    #[error("Refresh token is revoked or expired")]
    RevokedOrExpired,

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}

#[async_trait]
pub trait IRefreshSessionUseCase: Send + Sync {
    async fn execute(
        &self,
        command: RefreshSessionCommand,
    ) -> Result<RefreshedAccess, RefreshSessionError>;
}

pub struct RefreshSessionUseCase {
    sessions: SessionService,
}

impl RefreshSessionUseCase {
    pub fn new(sessions: SessionService) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl IRefreshSessionUseCase for RefreshSessionUseCase {
    async fn execute(
        &self,
        command: RefreshSessionCommand,
    ) -> Result<RefreshedAccess, RefreshSessionError> {
        let principal = self
            .sessions
            .tokens()
            .verify(&command.refresh_token, TokenKind::Refresh)
            .map_err(|e| {
                tracing::debug!("Refresh token rejected: {}", e);
                RefreshSessionError::RevokedOrExpired
            })?;

        // Only the most recently issued refresh token of the account is live.
        let cached = self
            .sessions
            .store()
            .find(principal.id)
            .await
            .map_err(|e| RefreshSessionError::CacheError(e.to_string()))?;
        if cached.as_deref() != Some(command.refresh_token.as_str()) {
            tracing::warn!(account_id = %principal.id, "Refresh token not in cache");
            return Err(RefreshSessionError::RevokedOrExpired);
        }

        let access = self
            .sessions
            .tokens()
            .issue(&principal, TokenKind::Access)
            .map_err(|e| RefreshSessionError::TokenGenerationFailed(e.to_string()))?;

        Ok(RefreshedAccess {
            access_token: access.token,
            expires_access: access.expires_at,
        })
    }
}
