use actix_web::{get, web, HttpResponse, Responder};

use crate::modules::account::application::use_cases::list_accounts::{
    ListAccountsError, ListAccountsParams, ListAccountsQuery,
};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/accounts")]
pub async fn list_accounts_handler(
    user: AuthenticatedUser,
    params: web::Query<ListAccountsParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = match ListAccountsQuery::parse(&params) {
        Ok(q) => q,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.account.list.execute(user.role, query).await {
        Ok(page) => ApiResponse::success("Successfully retrieved the account list", page),
        Err(e) => map_list_error(e),
    }
}

fn map_list_error(err: ListAccountsError) -> HttpResponse {
    match err {
        ListAccountsError::InvalidQuery(_) | ListAccountsError::InvalidDeletedFlag => {
            ApiResponse::validation_error(&err.to_string())
        }
        ListAccountsError::UnauthorizedRole => ApiResponse::forbidden(&err.to_string()),
        ListAccountsError::RepositoryError(ref e) => {
            tracing::error!(error = %e, "List accounts failed");
            ApiResponse::internal_error()
        }
    }
}
