use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{
    RefreshTokenStore, RefreshTokenStoreError,
};

/// Redis-backed refresh token cache.
///
/// One key per account:
/// ```text
/// auth:refresh:{account_id} -> "{refresh_token}"   (TTL = token lifetime)
/// ```
/// Redis expiry is the only cleanup mechanism; a missing key means the
/// session is over.
#[derive(Clone)]
pub struct RedisRefreshTokenStore {
    pool: Arc<Pool>,
}

impl RedisRefreshTokenStore {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn key(account_id: Uuid) -> String {
        format!("auth:refresh:{account_id}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, RefreshTokenStoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| RefreshTokenStoreError::CacheError(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl RefreshTokenStore for RedisRefreshTokenStore {
    async fn save(
        &self,
        account_id: Uuid,
        token: &str,
        ttl_seconds: u64,
    ) -> Result<(), RefreshTokenStoreError> {
        if ttl_seconds == 0 {
            return self.revoke(account_id).await;
        }

        let mut conn = self.get_conn().await?;

        // SET .. EX replaces any previous token, so older refresh tokens die here.
        deadpool_redis::redis::cmd("SET")
            .arg(Self::key(account_id))
            .arg(token)
            .arg("EX")
            .arg(ttl_seconds)
            .query_async::<()>(&mut *conn)
            .await
            .map_err(|e| RefreshTokenStoreError::CacheError(e.to_string()))
    }

    async fn find(&self, account_id: Uuid) -> Result<Option<String>, RefreshTokenStoreError> {
        let mut conn = self.get_conn().await?;

        conn.get(Self::key(account_id))
            .await
            .map_err(|e| RefreshTokenStoreError::CacheError(e.to_string()))
    }

    async fn revoke(&self, account_id: Uuid) -> Result<(), RefreshTokenStoreError> {
        let mut conn = self.get_conn().await?;

        conn.del::<_, ()>(Self::key(account_id))
            .await
            .map_err(|e| RefreshTokenStoreError::CacheError(e.to_string()))
    }
}
