use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::account::application::use_cases::activate_account::{
    ActivateAccountCommand, ActivateAccountError, IActivateAccountUseCase,
};
use crate::modules::auth::application::domain::entities::LoginSession;
use crate::modules::auth::application::services::SessionService;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivationLoginError {
    #[error(transparent)]
    Activation(#[from] ActivateAccountError),

    #[error("Session error: {0}")]
    SessionFailed(String),
}

#[async_trait]
pub trait IActivationLogin: Send + Sync {
    async fn activate_and_login(
        &self,
        command: ActivateAccountCommand,
    ) -> Result<LoginSession, ActivationLoginError>;
}

/// Activates an account and signs it in within the same request.
#[derive(Clone)]
pub struct ActivationLoginOrchestrator {
    activate: Arc<dyn IActivateAccountUseCase + Send + Sync>,
    sessions: SessionService,
}

impl ActivationLoginOrchestrator {
    pub fn new(
        activate: Arc<dyn IActivateAccountUseCase + Send + Sync>,
        sessions: SessionService,
    ) -> Self {
        Self { activate, sessions }
    }
}

#[async_trait]
impl IActivationLogin for ActivationLoginOrchestrator {
    async fn activate_and_login(
        &self,
        command: ActivateAccountCommand,
    ) -> Result<LoginSession, ActivationLoginError> {
        let account = self.activate.execute(command).await?;

        self.sessions
            .open(&account)
            .await
            .map_err(|e| ActivationLoginError::SessionFailed(e.to_string()))
    }
}
