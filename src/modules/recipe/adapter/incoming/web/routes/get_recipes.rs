use actix_web::{get, web, Responder};

use crate::modules::recipe::application::ports::incoming::use_cases::{
    GetRecipesError, GetRecipesParams, GetRecipesQuery,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/recipes")]
pub async fn get_recipes_handler(
    params: web::Query<GetRecipesParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = match GetRecipesQuery::parse(&params) {
        Ok(q) => q,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.recipe.get_list.execute(query).await {
        Ok(page) => ApiResponse::success("Retrieved recipes successfully", page),
        Err(GetRecipesError::InvalidQuery(msg)) => ApiResponse::validation_error(&msg),
        Err(GetRecipesError::QueryError(e)) => {
            tracing::error!(error = %e, "List recipes failed");
            ApiResponse::internal_error()
        }
    }
}
