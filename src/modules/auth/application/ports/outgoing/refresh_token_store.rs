use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefreshTokenStoreError {
    #[error("Cache error: {0}")]
    CacheError(String),
}

/// Key-value store holding the one live refresh token of each account.
/// A missing entry means the session has ended.
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    async fn save(
        &self,
        account_id: Uuid,
        token: &str,
        ttl_seconds: u64,
    ) -> Result<(), RefreshTokenStoreError>;

    async fn find(&self, account_id: Uuid) -> Result<Option<String>, RefreshTokenStoreError>;

    /// Idempotent.
    async fn revoke(&self, account_id: Uuid) -> Result<(), RefreshTokenStoreError>;
}
