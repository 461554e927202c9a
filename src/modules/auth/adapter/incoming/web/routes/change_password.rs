use actix_web::{post, web, HttpResponse, Responder};

use crate::modules::account::application::use_cases::change_password::{
    ChangePasswordCommand, ChangePasswordError,
};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/auth/change-password")]
pub async fn change_password_handler(
    user: AuthenticatedUser,
    body: web::Json<ChangePasswordCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .account
        .change_password
        .execute(user.id, body.into_inner())
        .await
    {
        Ok(()) => {
            tracing::info!(account_id = %user.id, "Password changed");
            ApiResponse::ok("Change password successfully")
        }
        Err(e) => map_change_password_error(e),
    }
}

fn map_change_password_error(err: ChangePasswordError) -> HttpResponse {
    match err {
        ChangePasswordError::AccountNotFound => ApiResponse::not_found(&err.to_string()),
        ChangePasswordError::AccountNotActive => ApiResponse::forbidden(&err.to_string()),
        ChangePasswordError::OldPasswordIncorrect | ChangePasswordError::PasswordMismatch => {
            ApiResponse::bad_request(&err.to_string())
        }
        ChangePasswordError::HashingFailed(ref e) | ChangePasswordError::RepositoryError(ref e) => {
            tracing::error!(error = %e, "Change password failed");
            ApiResponse::internal_error()
        }
    }
}
