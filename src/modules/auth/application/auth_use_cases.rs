use std::sync::Arc;

use crate::modules::auth::application::orchestrator::{IActivationLogin, IOAuthLogin};
use crate::modules::auth::application::use_cases::{
    login::ILoginUseCase, logout::ILogoutUseCase, refresh_session::IRefreshSessionUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn ILoginUseCase + Send + Sync>,
    pub logout: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub refresh: Arc<dyn IRefreshSessionUseCase + Send + Sync>,
    pub activation_login: Arc<dyn IActivationLogin + Send + Sync>,
    pub oauth_login: Arc<dyn IOAuthLogin + Send + Sync>,
}
