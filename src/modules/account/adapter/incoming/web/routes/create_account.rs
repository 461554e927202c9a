use actix_web::{post, web, HttpResponse, Responder};

use crate::modules::account::application::use_cases::create_account::{
    CreateAccountCommand, CreateAccountError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/accounts")]
pub async fn create_account_handler(
    body: web::Json<CreateAccountCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.account.create.execute(body.into_inner()).await {
        Ok(account_id) => ApiResponse::success("Create user successfully", account_id),
        Err(e) => map_create_account_error(e),
    }
}

fn map_create_account_error(err: CreateAccountError) -> HttpResponse {
    match err {
        CreateAccountError::EmailAlreadyInUse | CreateAccountError::UsernameAlreadyInUse => {
            ApiResponse::conflict(&err.to_string())
        }
        CreateAccountError::HashingFailed(ref e) | CreateAccountError::RepositoryError(ref e) => {
            tracing::error!(error = %e, "Create account failed");
            ApiResponse::internal_error()
        }
    }
}
