use std::sync::Arc;
use uuid::Uuid;

use crate::modules::account::application::domain::entities::Account;
use crate::modules::auth::application::domain::entities::{LoginSession, Principal};
use crate::modules::auth::application::ports::outgoing::{
    RefreshTokenStore, TokenKind, TokenProvider,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}

/// Issues token pairs and keeps the refresh token cached per account.
#[derive(Clone)]
pub struct SessionService {
    tokens: Arc<dyn TokenProvider>,
    store: Arc<dyn RefreshTokenStore>,
}

impl SessionService {
    pub fn new(tokens: Arc<dyn TokenProvider>, store: Arc<dyn RefreshTokenStore>) -> Self {
        Self { tokens, store }
    }

    pub fn tokens(&self) -> &Arc<dyn TokenProvider> {
        &self.tokens
    }

    pub fn store(&self) -> &Arc<dyn RefreshTokenStore> {
        &self.store
    }

    pub async fn open(&self, account: &Account) -> Result<LoginSession, SessionError> {
        let principal = Principal::from(account);

        let access = self
            .tokens
            .issue(&principal, TokenKind::Access)
            .map_err(|e| SessionError::TokenError(e.to_string()))?;
        let refresh = self
            .tokens
            .issue(&principal, TokenKind::Refresh)
            .map_err(|e| SessionError::TokenError(e.to_string()))?;

        self.store
            .save(principal.id, &refresh.token, refresh.ttl_seconds)
            .await
            .map_err(|e| SessionError::CacheError(e.to_string()))?;

        tracing::debug!(account_id = %principal.id, "Session opened");

        Ok(LoginSession {
            account: principal,
            access_token: access.token,
            expires_access: access.expires_at,
            refresh_token: refresh.token,
            expires_refresh: refresh.expires_at,
        })
    }

    pub async fn close(&self, account_id: Uuid) -> Result<(), SessionError> {
        self.store
            .revoke(account_id)
            .await
            .map_err(|e| SessionError::CacheError(e.to_string()))
    }
}
