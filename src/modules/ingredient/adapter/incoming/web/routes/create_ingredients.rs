use actix_web::http::StatusCode;
use actix_web::{post, web, HttpResponse, Responder};

use crate::modules::ingredient::application::ports::incoming::use_cases::{
    CreateIngredientsCommand, CreateIngredientsError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/ingredients")]
pub async fn create_ingredients_handler(
    body: web::Json<CreateIngredientsCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.ingredient.create.execute(body.into_inner()).await {
        Ok(outcome) => ApiResponse::success(&outcome.message, outcome.ingredients),
        Err(e) => map_create_ingredients_error(e),
    }
}

fn map_create_ingredients_error(err: CreateIngredientsError) -> HttpResponse {
    match err {
        CreateIngredientsError::NothingCreated { message, existing } => {
            ApiResponse::error_with_data(StatusCode::BAD_REQUEST, &message, existing)
        }
        CreateIngredientsError::Conflict => ApiResponse::conflict(&err.to_string()),
        CreateIngredientsError::RepositoryError(ref e) => {
            tracing::error!(error = %e, "Create ingredients failed");
            ApiResponse::internal_error()
        }
    }
}
