use std::sync::Arc;

use crate::modules::account::application::use_cases::{
    activate_account::IActivateAccountUseCase, change_password::IChangePasswordUseCase,
    create_account::ICreateAccountUseCase, delete_account::IDeleteAccountUseCase,
    get_account::IGetAccountUseCase, get_profile::IGetProfileUseCase,
    list_accounts::IListAccountsUseCase, register_account::IRegisterAccountUseCase,
    request_activation::IRequestActivationUseCase,
    request_password_reset::IRequestPasswordResetUseCase, reset_password::IResetPasswordUseCase,
    resolve_oauth_account::IResolveOAuthAccountUseCase, toggle_ban::IToggleBanUseCase,
    update_profile::IUpdateProfileUseCase,
};

#[derive(Clone)]
pub struct AccountUseCases {
    pub register: Arc<dyn IRegisterAccountUseCase + Send + Sync>,
    pub activate: Arc<dyn IActivateAccountUseCase + Send + Sync>,
    pub request_activation: Arc<dyn IRequestActivationUseCase + Send + Sync>,
    pub request_password_reset: Arc<dyn IRequestPasswordResetUseCase + Send + Sync>,
    pub reset_password: Arc<dyn IResetPasswordUseCase + Send + Sync>,
    pub change_password: Arc<dyn IChangePasswordUseCase + Send + Sync>,
    pub get_profile: Arc<dyn IGetProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    pub toggle_ban: Arc<dyn IToggleBanUseCase + Send + Sync>,
    pub resolve_oauth: Arc<dyn IResolveOAuthAccountUseCase + Send + Sync>,
    pub list: Arc<dyn IListAccountsUseCase + Send + Sync>,
    pub create: Arc<dyn ICreateAccountUseCase + Send + Sync>,
    pub get: Arc<dyn IGetAccountUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteAccountUseCase + Send + Sync>,
}
