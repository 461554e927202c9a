use actix_web::{post, web, HttpResponse, Responder};
use actix_web::http::StatusCode;

use crate::modules::tag::application::ports::incoming::use_cases::{
    CreateTagsCommand, CreateTagsError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/tags")]
pub async fn create_tags_handler(
    body: web::Json<CreateTagsCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.tag.create.execute(body.into_inner()).await {
        Ok(outcome) => ApiResponse::success(&outcome.message, outcome.tags),
        Err(e) => map_create_tags_error(e),
    }
}

fn map_create_tags_error(err: CreateTagsError) -> HttpResponse {
    match err {
        CreateTagsError::NothingCreated { message, existing } => {
            ApiResponse::error_with_data(StatusCode::BAD_REQUEST, &message, existing)
        }
        CreateTagsError::Conflict => ApiResponse::conflict(&err.to_string()),
        CreateTagsError::RepositoryError(ref e) => {
            tracing::error!(error = %e, "Create tags failed");
            ApiResponse::internal_error()
        }
    }
}
