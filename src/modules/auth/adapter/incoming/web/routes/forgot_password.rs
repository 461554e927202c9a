use actix_web::{post, web, HttpResponse, Responder};

use crate::modules::account::application::use_cases::request_password_reset::{
    RequestPasswordResetCommand, RequestPasswordResetError,
};
use crate::modules::account::application::use_cases::reset_password::{
    ResetPasswordCommand, ResetPasswordError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/auth/forgot-password/request")]
pub async fn request_password_reset_handler(
    body: web::Json<RequestPasswordResetCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .account
        .request_password_reset
        .execute(body.into_inner())
        .await
    {
        Ok(()) => ApiResponse::ok("Please check your email to get the activation code"),
        Err(RequestPasswordResetError::AccountNotFound) => {
            ApiResponse::bad_request("Account not found")
        }
        Err(RequestPasswordResetError::RepositoryError(e)) => {
            tracing::error!(error = %e, "Password reset request failed");
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/auth/forgot-password/reset")]
pub async fn reset_password_handler(
    body: web::Json<ResetPasswordCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.account.reset_password.execute(body.into_inner()).await {
        Ok(()) => ApiResponse::ok("Password changed successfully"),
        Err(e) => map_reset_error(e),
    }
}

fn map_reset_error(err: ResetPasswordError) -> HttpResponse {
    match err {
        ResetPasswordError::PasswordMismatch
        | ResetPasswordError::AccountNotFound
        | ResetPasswordError::CodeExpired
        | ResetPasswordError::CodeIncorrect => ApiResponse::bad_request(&err.to_string()),
        ResetPasswordError::HashingFailed(ref e) | ResetPasswordError::RepositoryError(ref e) => {
            tracing::error!(error = %e, "Password reset failed");
            ApiResponse::internal_error()
        }
    }
}
