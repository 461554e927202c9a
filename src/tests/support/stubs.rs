//! Placeholder use cases for the slots a route test does not exercise.

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::account::application::domain::entities::{Account, Role};
use crate::modules::account::application::ports::outgoing::{AccountListItem, AccountProfileView};
use crate::modules::account::application::use_cases::{
    activate_account::{ActivateAccountCommand, ActivateAccountError, IActivateAccountUseCase},
    change_password::{ChangePasswordCommand, ChangePasswordError, IChangePasswordUseCase},
    create_account::{CreateAccountCommand, CreateAccountError, ICreateAccountUseCase},
    delete_account::{DeleteAccountError, IDeleteAccountUseCase},
    get_account::{GetAccountError, IGetAccountUseCase},
    get_profile::{GetProfileError, IGetProfileUseCase},
    list_accounts::{IListAccountsUseCase, ListAccountsError, ListAccountsQuery},
    register_account::{IRegisterAccountUseCase, RegisterAccountCommand, RegisterAccountError},
    request_activation::{
        IRequestActivationUseCase, RequestActivationCommand, RequestActivationError,
    },
    request_password_reset::{
        IRequestPasswordResetUseCase, RequestPasswordResetCommand, RequestPasswordResetError,
    },
    reset_password::{IResetPasswordUseCase, ResetPasswordCommand, ResetPasswordError},
    resolve_oauth_account::{IResolveOAuthAccountUseCase, OAuthProfile, ResolveOAuthAccountError},
    toggle_ban::{IToggleBanUseCase, ToggleBanError},
    update_profile::{IUpdateProfileUseCase, UpdateProfileCommand, UpdateProfileError},
};
use crate::modules::auth::application::domain::entities::{LoginSession, RefreshedAccess};
use crate::modules::auth::application::orchestrator::{
    ActivationLoginError, IActivationLogin, IOAuthLogin, OAuthLoginError,
};
use crate::modules::auth::application::use_cases::{
    login::{ILoginUseCase, LoginCommand, LoginError},
    logout::{ILogoutUseCase, LogoutError},
    refresh_session::{IRefreshSessionUseCase, RefreshSessionCommand, RefreshSessionError},
};
use crate::modules::ingredient::application::domain::entities::Ingredient;
use crate::modules::ingredient::application::ports::incoming::use_cases::{
    CreateIngredientsCommand, CreateIngredientsError, CreateIngredientsOutcome,
    CreateIngredientsUseCase, GetIngredientsError, GetIngredientsQuery, GetIngredientsUseCase,
    RemoveIngredientsError, RemoveIngredientsUseCase,
};
use crate::modules::recipe::application::domain::entities::{CreatedRecipe, RecipeView};
use crate::modules::recipe::application::ports::incoming::use_cases::{
    CreateRecipeCommand, CreateRecipeError, CreateRecipeUseCase, GetRecipesError,
    GetRecipesQuery, GetRecipesUseCase,
};
use crate::modules::tag::application::domain::entities::Tag;
use crate::modules::tag::application::ports::incoming::use_cases::{
    CreateTagsCommand, CreateTagsError, CreateTagsOutcome, CreateTagsUseCase, GetTagsError,
    GetTagsQuery, GetTagsUseCase, RemoveTagsError, RemoveTagsUseCase,
};
use crate::shared::catalog::IdList;
use crate::shared::pagination::Paginated;

const NOT_USED: &str = "not used in this test";

/// Fills every use-case slot of a test `AppState`; each call fails with a
/// repository error.
pub struct NotUsed;

fn not_used() -> String {
    NOT_USED.to_string()
}

// ──── Account ────

#[async_trait]
impl IRegisterAccountUseCase for NotUsed {
    async fn execute(&self, _: RegisterAccountCommand) -> Result<Uuid, RegisterAccountError> {
        Err(RegisterAccountError::RepositoryError(not_used()))
    }
}

#[async_trait]
impl IActivateAccountUseCase for NotUsed {
    async fn execute(&self, _: ActivateAccountCommand) -> Result<Account, ActivateAccountError> {
        Err(ActivateAccountError::RepositoryError(not_used()))
    }
}

#[async_trait]
impl IRequestActivationUseCase for NotUsed {
    async fn execute(&self, _: RequestActivationCommand) -> Result<(), RequestActivationError> {
        Err(RequestActivationError::RepositoryError(not_used()))
    }
}

#[async_trait]
impl IRequestPasswordResetUseCase for NotUsed {
    async fn execute(
        &self,
        _: RequestPasswordResetCommand,
    ) -> Result<(), RequestPasswordResetError> {
        Err(RequestPasswordResetError::RepositoryError(not_used()))
    }
}

#[async_trait]
impl IResetPasswordUseCase for NotUsed {
    async fn execute(&self, _: ResetPasswordCommand) -> Result<(), ResetPasswordError> {
        Err(ResetPasswordError::RepositoryError(not_used()))
    }
}

#[async_trait]
impl IChangePasswordUseCase for NotUsed {
    async fn execute(&self, _: Uuid, _: ChangePasswordCommand) -> Result<(), ChangePasswordError> {
        Err(ChangePasswordError::RepositoryError(not_used()))
    }
}

#[async_trait]
impl IGetProfileUseCase for NotUsed {
    async fn execute(&self, _: Uuid) -> Result<AccountProfileView, GetProfileError> {
        Err(GetProfileError::RepositoryError(not_used()))
    }
}

#[async_trait]
impl IUpdateProfileUseCase for NotUsed {
    async fn execute(
        &self,
        _: Uuid,
        _: UpdateProfileCommand,
    ) -> Result<AccountProfileView, UpdateProfileError> {
        Err(UpdateProfileError::RepositoryError(not_used()))
    }
}

#[async_trait]
impl IToggleBanUseCase for NotUsed {
    async fn execute(&self, _: Uuid) -> Result<Account, ToggleBanError> {
        Err(ToggleBanError::RepositoryError(not_used()))
    }
}

#[async_trait]
impl IResolveOAuthAccountUseCase for NotUsed {
    async fn execute(&self, _: OAuthProfile) -> Result<Account, ResolveOAuthAccountError> {
        Err(ResolveOAuthAccountError::RepositoryError(not_used()))
    }
}

#[async_trait]
impl IListAccountsUseCase for NotUsed {
    async fn execute(
        &self,
        _: Role,
        _: ListAccountsQuery,
    ) -> Result<Paginated<AccountListItem>, ListAccountsError> {
        Err(ListAccountsError::RepositoryError(not_used()))
    }
}

#[async_trait]
impl ICreateAccountUseCase for NotUsed {
    async fn execute(&self, _: CreateAccountCommand) -> Result<Uuid, CreateAccountError> {
        Err(CreateAccountError::RepositoryError(not_used()))
    }
}

#[async_trait]
impl IGetAccountUseCase for NotUsed {
    async fn execute(&self, _: Uuid) -> Result<AccountListItem, GetAccountError> {
        Err(GetAccountError::RepositoryError(not_used()))
    }
}

#[async_trait]
impl IDeleteAccountUseCase for NotUsed {
    async fn execute(&self, _: Uuid) -> Result<(), DeleteAccountError> {
        Err(DeleteAccountError::RepositoryError(not_used()))
    }
}

// ──── Auth ────

#[async_trait]
impl ILoginUseCase for NotUsed {
    async fn execute(&self, _: LoginCommand) -> Result<LoginSession, LoginError> {
        Err(LoginError::QueryError(not_used()))
    }
}

#[async_trait]
impl ILogoutUseCase for NotUsed {
    async fn execute(&self, _: Uuid) -> Result<(), LogoutError> {
        Err(LogoutError::CacheError(not_used()))
    }
}

#[async_trait]
impl IRefreshSessionUseCase for NotUsed {
    async fn execute(
        &self,
        _: RefreshSessionCommand,
    ) -> Result<RefreshedAccess, RefreshSessionError> {
        Err(RefreshSessionError::CacheError(not_used()))
    }
}

#[async_trait]
impl IActivationLogin for NotUsed {
    async fn activate_and_login(
        &self,
        _: ActivateAccountCommand,
    ) -> Result<LoginSession, ActivationLoginError> {
        Err(ActivationLoginError::SessionFailed(not_used()))
    }
}

#[async_trait]
impl IOAuthLogin for NotUsed {
    fn authorization_url(&self) -> String {
        "https://accounts.google.com/o/oauth2/v2/auth".to_string()
    }

    async fn login(&self, _: &str) -> Result<LoginSession, OAuthLoginError> {
        Err(OAuthLoginError::SessionFailed(not_used()))
    }
}

// ──── Catalog ────

#[async_trait]
impl CreateTagsUseCase for NotUsed {
    async fn execute(&self, _: CreateTagsCommand) -> Result<CreateTagsOutcome, CreateTagsError> {
        Err(CreateTagsError::RepositoryError(not_used()))
    }
}

#[async_trait]
impl GetTagsUseCase for NotUsed {
    async fn execute(&self, _: GetTagsQuery) -> Result<Paginated<Tag>, GetTagsError> {
        Err(GetTagsError::QueryError(not_used()))
    }
}

#[async_trait]
impl RemoveTagsUseCase for NotUsed {
    async fn execute(&self, _: IdList) -> Result<String, RemoveTagsError> {
        Err(RemoveTagsError::RepositoryError(not_used()))
    }
}

#[async_trait]
impl CreateIngredientsUseCase for NotUsed {
    async fn execute(
        &self,
        _: CreateIngredientsCommand,
    ) -> Result<CreateIngredientsOutcome, CreateIngredientsError> {
        Err(CreateIngredientsError::RepositoryError(not_used()))
    }
}

#[async_trait]
impl GetIngredientsUseCase for NotUsed {
    async fn execute(
        &self,
        _: GetIngredientsQuery,
    ) -> Result<Paginated<Ingredient>, GetIngredientsError> {
        Err(GetIngredientsError::QueryError(not_used()))
    }
}

#[async_trait]
impl RemoveIngredientsUseCase for NotUsed {
    async fn execute(&self, _: IdList) -> Result<String, RemoveIngredientsError> {
        Err(RemoveIngredientsError::RepositoryError(not_used()))
    }
}

// ──── Recipe ────

#[async_trait]
impl CreateRecipeUseCase for NotUsed {
    async fn execute(
        &self,
        _: Uuid,
        _: CreateRecipeCommand,
    ) -> Result<CreatedRecipe, CreateRecipeError> {
        Err(CreateRecipeError::RepositoryError(not_used()))
    }
}

#[async_trait]
impl GetRecipesUseCase for NotUsed {
    async fn execute(&self, _: GetRecipesQuery) -> Result<Paginated<RecipeView>, GetRecipesError> {
        Err(GetRecipesError::QueryError(not_used()))
    }
}
