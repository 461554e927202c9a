use actix_web::{post, web, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::auth::application::use_cases::logout::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/auth/logout")]
pub async fn logout_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.auth.logout.execute(user.id).await {
        Ok(()) => {
            tracing::info!(account_id = %user.id, "Logged out");
            ApiResponse::ok("Logout successfully")
        }
        Err(LogoutError::CacheError(e)) => {
            tracing::error!(account_id = %user.id, error = %e, "Logout failed");
            ApiResponse::internal_error()
        }
    }
}
