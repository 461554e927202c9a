use actix_web::{get, http::header, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::modules::auth::application::orchestrator::OAuthLoginError;
use crate::modules::account::application::use_cases::resolve_oauth_account::ResolveOAuthAccountError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GoogleCallbackQuery {
    code: String,
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

#[get("/api/auth/google/login")]
pub async fn google_login_handler(data: web::Data<AppState>) -> impl Responder {
    redirect(&data.auth.oauth_login.authorization_url())
}

#[get("/api/auth/google/callback")]
pub async fn google_callback_handler(
    query: web::Query<GoogleCallbackQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.oauth_login.login(&query.code).await {
        Ok(session) => {
            let target = reqwest::Url::parse_with_params(
                &data.client_login_url,
                &[
                    ("accessToken", session.access_token.as_str()),
                    ("refreshToken", session.refresh_token.as_str()),
                ],
            );
            match target {
                Ok(url) => redirect(url.as_str()),
                Err(e) => {
                    tracing::error!(error = %e, "Client login URL is not a valid URL");
                    ApiResponse::internal_error()
                }
            }
        }
        Err(e) => map_oauth_error(e),
    }
}

fn map_oauth_error(err: OAuthLoginError) -> HttpResponse {
    match err {
        OAuthLoginError::AccountBanned => ApiResponse::unauthorized(&err.to_string()),
        OAuthLoginError::Provider(ref e) => {
            tracing::warn!(error = %e, "Google sign-in rejected");
            ApiResponse::unauthorized("Google authentication failed")
        }
        OAuthLoginError::Resolve(ResolveOAuthAccountError::MissingEmail) => {
            ApiResponse::bad_request(&err.to_string())
        }
        OAuthLoginError::Resolve(ResolveOAuthAccountError::RepositoryError(ref e))
        | OAuthLoginError::SessionFailed(ref e) => {
            tracing::error!(error = %e, "Google sign-in failed");
            ApiResponse::internal_error()
        }
    }
}
