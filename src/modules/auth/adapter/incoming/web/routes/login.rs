use actix_web::{post, web, HttpResponse, Responder};

use crate::modules::auth::application::use_cases::login::{LoginCommand, LoginError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/auth/login")]
pub async fn login_handler(
    body: web::Json<LoginCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = body.into_inner();
    tracing::info!(login_key = %command.login_key(), "Login attempt");

    match data.auth.login.execute(command).await {
        Ok(session) => ApiResponse::success("Login successfully", session),
        Err(e) => map_login_error(e),
    }
}

fn map_login_error(err: LoginError) -> HttpResponse {
    match err {
        LoginError::InvalidCredentials
        | LoginError::AccountNotActive
        | LoginError::AccountBanned => {
            tracing::warn!("Login rejected: {}", err);
            ApiResponse::unauthorized(&err.to_string())
        }
        LoginError::PasswordVerificationFailed(ref e)
        | LoginError::SessionError(ref e)
        | LoginError::QueryError(ref e) => {
            tracing::error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
