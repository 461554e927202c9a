use actix_web::{get, put, web, HttpResponse, Responder};

use crate::modules::account::application::use_cases::get_profile::GetProfileError;
use crate::modules::account::application::use_cases::update_profile::{
    UpdateProfileCommand, UpdateProfileError,
};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/accounts/profile")]
pub async fn get_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.account.get_profile.execute(user.id).await {
        Ok(profile) => ApiResponse::success("Successfully retrieved the profile", profile),
        Err(GetProfileError::NotFound) => {
            ApiResponse::not_found(&GetProfileError::NotFound.to_string())
        }
        Err(GetProfileError::RepositoryError(e)) => {
            tracing::error!(account_id = %user.id, error = %e, "Fetch profile failed");
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/accounts/profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    body: web::Json<UpdateProfileCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .account
        .update_profile
        .execute(user.id, body.into_inner())
        .await
    {
        Ok(profile) => ApiResponse::success("Update user successfully", profile),
        Err(e) => map_update_profile_error(e),
    }
}

/// Shared with the admin update of another account.
pub(super) fn map_update_profile_error(err: UpdateProfileError) -> HttpResponse {
    match err {
        UpdateProfileError::NotFound => ApiResponse::not_found(&err.to_string()),
        UpdateProfileError::PhoneAlreadyInUse => ApiResponse::conflict(&err.to_string()),
        UpdateProfileError::RepositoryError(ref e) => {
            tracing::error!(error = %e, "Update profile failed");
            ApiResponse::internal_error()
        }
    }
}
