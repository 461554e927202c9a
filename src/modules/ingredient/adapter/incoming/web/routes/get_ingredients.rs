use actix_web::{get, web, Responder};

use crate::modules::ingredient::application::ports::incoming::use_cases::{
    GetIngredientsError, GetIngredientsParams, GetIngredientsQuery,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/ingredients")]
pub async fn get_ingredients_handler(
    params: web::Query<GetIngredientsParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = match GetIngredientsQuery::parse(&params) {
        Ok(q) => q,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.ingredient.get_list.execute(query).await {
        Ok(page) => ApiResponse::success("Retrieved all ingredients successfully", page),
        Err(GetIngredientsError::InvalidQuery(msg)) => ApiResponse::validation_error(&msg),
        Err(GetIngredientsError::QueryError(e)) => {
            tracing::error!(error = %e, "List ingredients failed");
            ApiResponse::internal_error()
        }
    }
}
