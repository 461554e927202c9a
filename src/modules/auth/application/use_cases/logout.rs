use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::services::SessionService;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogoutError {
    #[error("Cache error: {0}")]
    CacheError(String),
}

#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, account_id: Uuid) -> Result<(), LogoutError>;
}

pub struct LogoutUseCase {
    sessions: SessionService,
}

impl LogoutUseCase {
    pub fn new(sessions: SessionService) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl ILogoutUseCase for LogoutUseCase {
    async fn execute(&self, account_id: Uuid) -> Result<(), LogoutError> {
        self.sessions
            .close(account_id)
            .await
            .map_err(|e| LogoutError::CacheError(e.to_string()))?;

        tracing::info!(account_id = %account_id, "Account logged out");
        Ok(())
    }
}
