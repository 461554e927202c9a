use actix_web::{post, web, HttpResponse, Responder};

use crate::modules::account::application::use_cases::request_activation::{
    RequestActivationCommand, RequestActivationError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/auth/request-active")]
pub async fn request_activation_handler(
    body: web::Json<RequestActivationCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.account.request_activation.execute(body.into_inner()).await {
        Ok(()) => ApiResponse::ok("Please check your email to get the activation code"),
        Err(e) => map_request_activation_error(e),
    }
}

fn map_request_activation_error(err: RequestActivationError) -> HttpResponse {
    match err {
        RequestActivationError::AccountNotFound => ApiResponse::bad_request(&err.to_string()),
        RequestActivationError::AlreadyActivated => ApiResponse::conflict(&err.to_string()),
        RequestActivationError::RepositoryError(ref e) => {
            tracing::error!(error = %e, "Activation code request failed");
            ApiResponse::internal_error()
        }
    }
}
