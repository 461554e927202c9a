use actix_web::{post, web, HttpResponse, Responder};

use crate::modules::auth::application::use_cases::refresh_session::{
    RefreshSessionCommand, RefreshSessionError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/auth/refresh")]
pub async fn refresh_handler(
    body: web::Json<RefreshSessionCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.refresh.execute(body.into_inner()).await {
        Ok(access) => ApiResponse::success("Refresh token successfully", access),
        Err(e) => map_refresh_error(e),
    }
}

fn map_refresh_error(err: RefreshSessionError) -> HttpResponse {
    match err {
        RefreshSessionError::RevokedOrExpired => ApiResponse::unauthorized(&err.to_string()),
        RefreshSessionError::TokenGenerationFailed(ref e)
        | RefreshSessionError::CacheError(ref e) => {
            tracing::error!(error = %e, "Refresh failed");
            ApiResponse::internal_error()
        }
    }
}
