use actix_web::{get, web, Responder};

use crate::modules::tag::application::ports::incoming::use_cases::{
    GetTagsError, GetTagsParams, GetTagsQuery,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/tags")]
pub async fn get_tags_handler(
    params: web::Query<GetTagsParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = match GetTagsQuery::parse(&params) {
        Ok(q) => q,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.tag.get_list.execute(query).await {
        Ok(page) => ApiResponse::success("Retrieved all tags successfully", page),
        Err(GetTagsError::InvalidQuery(msg)) => ApiResponse::validation_error(&msg),
        Err(GetTagsError::QueryError(e)) => {
            tracing::error!(error = %e, "List tags failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::tag::application::domain::entities::Tag;
    use crate::modules::tag::application::ports::incoming::use_cases::GetTagsUseCase;
    use crate::shared::pagination::Paginated;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::catalog_fixtures::tag;
    use actix_web::test;
    use async_trait::async_trait;
    use mockall::mock;
    use std::sync::Arc;

    mock! {
        List {}

        #[async_trait]
        impl GetTagsUseCase for List {
            async fn execute(&self, query: GetTagsQuery) -> Result<Paginated<Tag>, GetTagsError>;
        }
    }

    #[actix_web::test]
    async fn anonymous_caller_gets_page() {
        let mut list = MockList::new();
        list.expect_execute()
            .withf(|q| q.keyword() == Some("veg") && q.page().page_size() == 5)
            .times(1)
            .returning(|q| {
                Ok(Paginated {
                    data: vec![tag("Vegan", false)],
                    pagination: q.page().pagination(1),
                })
            });

        let state = TestAppStateBuilder::default()
            .with_tag(|uc| uc.get_list = Arc::new(list))
            .build();
        let app = crate::test_app!(state, get_tags_handler);

        let req = test::TestRequest::get()
            .uri("/api/tags?keyword=veg&page_size=5")
            .to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(json["messageDetail"], "Retrieved all tags successfully");
        assert_eq!(json["data"]["data"][0]["name"], "Vegan");
        assert_eq!(json["data"]["pagination"]["totalItem"], 1);
        assert_eq!(json["data"]["pagination"]["pageSize"], 5);
    }

    #[actix_web::test]
    async fn zero_page_index_is_rejected() {
        let state = TestAppStateBuilder::default().build();
        let app = crate::test_app!(state, get_tags_handler);

        let req = test::TestRequest::get()
            .uri("/api/tags?page_index=0")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["messageDetail"], "Page index must be a positive integer");
    }

    #[actix_web::test]
    async fn unknown_query_field_is_rejected() {
        let state = TestAppStateBuilder::default().build();
        let app = crate::test_app!(state, get_tags_handler);

        let req = test::TestRequest::get()
            .uri("/api/tags?color=red")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
    }
}
