use actix_web::{post, web, HttpResponse, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::recipe::application::ports::incoming::use_cases::{
    CreateRecipeCommand, CreateRecipeError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/recipes")]
pub async fn create_recipe_handler(
    user: AuthenticatedUser,
    body: web::Json<CreateRecipeCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.recipe.create.execute(user.id, body.into_inner()).await {
        Ok(created) => ApiResponse::success("Create recipe successfully", created),
        Err(e) => map_create_recipe_error(e),
    }
}

fn map_create_recipe_error(err: CreateRecipeError) -> HttpResponse {
    match err {
        CreateRecipeError::IngredientsNotFound(_) | CreateRecipeError::TagsNotFound(_) => {
            ApiResponse::not_found(&err.to_string())
        }
        CreateRecipeError::RepositoryError(ref e) => {
            tracing::error!(error = %e, "Create recipe failed");
            ApiResponse::internal_error()
        }
    }
}
