use actix_web::{patch, web, Responder};

use crate::modules::tag::application::ports::incoming::use_cases::RemoveTagsError;
use crate::shared::api::ApiResponse;
use crate::shared::catalog::IdList;
use crate::AppState;

#[patch("/api/tags")]
pub async fn remove_tags_handler(
    body: web::Json<IdList>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.tag.remove.execute(body.into_inner()).await {
        Ok(message) => ApiResponse::ok(&message),
        Err(e @ RemoveTagsError::NoIds) => ApiResponse::bad_request(&e.to_string()),
        Err(RemoveTagsError::NoneFound(msg)) => ApiResponse::not_found(&msg),
        Err(RemoveTagsError::RepositoryError(e)) => {
            tracing::error!(error = %e, "Remove tags failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::account::application::domain::entities::Role;
    use crate::modules::tag::application::ports::incoming::use_cases::RemoveTagsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer_for;
    use actix_web::test;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Arc;
    use uuid::Uuid;

    struct MockRemove {
        result: Result<String, RemoveTagsError>,
    }

    #[async_trait]
    impl RemoveTagsUseCase for MockRemove {
        async fn execute(&self, _ids: IdList) -> Result<String, RemoveTagsError> {
            self.result.clone()
        }
    }

    fn request(body: serde_json::Value) -> test::TestRequest {
        let (_, bearer) = bearer_for(Role::Staff);
        test::TestRequest::patch()
            .uri("/api/tags")
            .insert_header(("Authorization", bearer))
            .set_json(body)
    }

    #[actix_web::test]
    async fn removes_and_reports_summary() {
        let state = TestAppStateBuilder::default()
            .with_tag(|uc| {
                uc.remove = Arc::new(MockRemove {
                    result: Ok("Successfully soft-deleted 1 tag(s)".to_string()),
                })
            })
            .build();
        let app = crate::test_app!(state, remove_tags_handler);

        let req = request(json!([Uuid::new_v4()])).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["messageDetail"], "Successfully soft-deleted 1 tag(s)");
    }

    #[actix_web::test]
    async fn none_found_is_404() {
        let state = TestAppStateBuilder::default()
            .with_tag(|uc| {
                uc.remove = Arc::new(MockRemove {
                    result: Err(RemoveTagsError::NoneFound(
                        "No tags found with the provided Ids: x".to_string(),
                    )),
                })
            })
            .build();
        let app = crate::test_app!(state, remove_tags_handler);

        let req = request(json!([Uuid::new_v4()])).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn malformed_uuid_is_rejected() {
        let state = TestAppStateBuilder::default().build();
        let app = crate::test_app!(state, remove_tags_handler);

        let req = request(json!(["not-a-uuid"])).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
    }
}
