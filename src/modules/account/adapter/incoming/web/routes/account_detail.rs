use actix_web::{delete, get, put, web, Responder};
use uuid::Uuid;

use super::profile::map_update_profile_error;
use crate::modules::account::application::use_cases::delete_account::DeleteAccountError;
use crate::modules::account::application::use_cases::get_account::GetAccountError;
use crate::modules::account::application::use_cases::update_profile::UpdateProfileCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/accounts/{id}")]
pub async fn get_account_handler(path: web::Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
    match data.account.get.execute(path.into_inner()).await {
        Ok(account) => {
            ApiResponse::success("Successfully retrieved the user information", account)
        }
        Err(GetAccountError::NotFound) => {
            ApiResponse::not_found(&GetAccountError::NotFound.to_string())
        }
        Err(GetAccountError::RepositoryError(e)) => {
            tracing::error!(error = %e, "Fetch account failed");
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/accounts/{id}")]
pub async fn update_account_handler(
    path: web::Path<Uuid>,
    body: web::Json<UpdateProfileCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .account
        .update_profile
        .execute(path.into_inner(), body.into_inner())
        .await
    {
        Ok(profile) => ApiResponse::success("Update user successfully", profile),
        Err(e) => map_update_profile_error(e),
    }
}

#[delete("/api/accounts/{id}")]
pub async fn delete_account_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let account_id = path.into_inner();
    match data.account.delete.execute(account_id).await {
        Ok(()) => {
            tracing::info!(account_id = %account_id, "Account deleted");
            ApiResponse::ok("Delete user successfully")
        }
        Err(DeleteAccountError::AccountNotFound) => {
            ApiResponse::not_found(&DeleteAccountError::AccountNotFound.to_string())
        }
        Err(DeleteAccountError::RepositoryError(e)) => {
            tracing::error!(error = %e, "Delete account failed");
            ApiResponse::internal_error()
        }
    }
}
