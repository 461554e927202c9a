use actix_web::{put, web, Responder};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::account::application::use_cases::toggle_ban::ToggleBanError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BanStatus {
    id: Uuid,
    is_banned: bool,
}

#[put("/api/accounts/{user_id}/handle-ban")]
pub async fn handle_ban_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.account.toggle_ban.execute(path.into_inner()).await {
        Ok(account) => ApiResponse::success(
            "Ban status updated successfully",
            BanStatus {
                id: account.id,
                is_banned: account.is_banned,
            },
        ),
        Err(ToggleBanError::AccountNotFound) => {
            ApiResponse::not_found(&ToggleBanError::AccountNotFound.to_string())
        }
        Err(ToggleBanError::RepositoryError(e)) => {
            tracing::error!(error = %e, "Toggle ban failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::account::application::domain::entities::{Account, Role};
    use crate::modules::account::application::use_cases::toggle_ban::IToggleBanUseCase;
    use crate::tests::support::account_fixtures::account;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer_for;
    use actix_web::test;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct MockToggle;

    #[async_trait]
    impl IToggleBanUseCase for MockToggle {
        async fn execute(&self, account_id: Uuid) -> Result<Account, ToggleBanError> {
            Ok(Account {
                id: account_id,
                is_banned: true,
                ..account(Role::User)
            })
        }
    }

    #[actix_web::test]
    async fn admin_toggles_ban() {
        let state = TestAppStateBuilder::default()
            .with_account(|uc| uc.toggle_ban = Arc::new(MockToggle))
            .build();
        let app = crate::test_app!(state, handle_ban_handler);

        let target = Uuid::new_v4();
        let (_, bearer) = bearer_for(Role::Admin);
        let req = test::TestRequest::put()
            .uri(&format!("/api/accounts/{}/handle-ban", target))
            .insert_header(("Authorization", bearer))
            .to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(json["messageDetail"], "Ban status updated successfully");
        assert_eq!(json["data"]["id"], target.to_string());
        assert_eq!(json["data"]["isBanned"], true);
    }

    #[actix_web::test]
    async fn malformed_id_is_400() {
        let state = TestAppStateBuilder::default().build();
        let app = crate::test_app!(state, handle_ban_handler);

        let (_, bearer) = bearer_for(Role::Admin);
        let req = test::TestRequest::put()
            .uri("/api/accounts/not-a-uuid/handle-ban")
            .insert_header(("Authorization", bearer))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn staff_cannot_ban() {
        let state = TestAppStateBuilder::default().build();
        let app = crate::test_app!(state, handle_ban_handler);

        let (_, bearer) = bearer_for(Role::Staff);
        let req = test::TestRequest::put()
            .uri(&format!("/api/accounts/{}/handle-ban", Uuid::new_v4()))
            .insert_header(("Authorization", bearer))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
    }
}
