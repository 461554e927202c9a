use actix_web::{patch, web, Responder};

use crate::modules::ingredient::application::ports::incoming::use_cases::RemoveIngredientsError;
use crate::shared::api::ApiResponse;
use crate::shared::catalog::IdList;
use crate::AppState;

#[patch("/api/ingredients")]
pub async fn remove_ingredients_handler(
    body: web::Json<IdList>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.ingredient.remove.execute(body.into_inner()).await {
        Ok(message) => ApiResponse::ok(&message),
        Err(e @ RemoveIngredientsError::NoIds) => ApiResponse::bad_request(&e.to_string()),
        Err(RemoveIngredientsError::NoneFound(msg)) => ApiResponse::not_found(&msg),
        Err(RemoveIngredientsError::RepositoryError(e)) => {
            tracing::error!(error = %e, "Remove ingredients failed");
            ApiResponse::internal_error()
        }
    }
}
