use actix_web::{post, web, HttpResponse, Responder};

use crate::modules::account::application::use_cases::register_account::{
    RegisterAccountCommand, RegisterAccountError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/auth/register")]
pub async fn register_handler(
    body: web::Json<RegisterAccountCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = body.into_inner();
    tracing::info!(email = %command.email(), "Registration attempt");

    match data.account.register.execute(command).await {
        Ok(account_id) => ApiResponse::success(
            "Please check your email to get the activation code",
            account_id,
        ),
        Err(e) => map_register_error(e),
    }
}

fn map_register_error(err: RegisterAccountError) -> HttpResponse {
    match err {
        RegisterAccountError::EmailAlreadyInUse | RegisterAccountError::UsernameAlreadyInUse => {
            ApiResponse::conflict(&err.to_string())
        }
        RegisterAccountError::PasswordMismatch => ApiResponse::bad_request(&err.to_string()),
        RegisterAccountError::HashingFailed(ref e) | RegisterAccountError::RepositoryError(ref e) => {
            tracing::error!(error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}
