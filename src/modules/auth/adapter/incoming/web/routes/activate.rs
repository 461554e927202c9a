use actix_web::{post, web, HttpResponse, Responder};

use crate::modules::account::application::use_cases::activate_account::{
    ActivateAccountCommand, ActivateAccountError,
};
use crate::modules::auth::application::orchestrator::ActivationLoginError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/auth/active")]
pub async fn activate_handler(
    body: web::Json<ActivateAccountCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .auth
        .activation_login
        .activate_and_login(body.into_inner())
        .await
    {
        Ok(session) => ApiResponse::success("Account is activate successfully", session),
        Err(e) => map_activation_error(e),
    }
}

fn map_activation_error(err: ActivationLoginError) -> HttpResponse {
    match err {
        ActivationLoginError::Activation(ActivateAccountError::InvalidOrExpiredCode) => {
            ApiResponse::bad_request("OTP is expired or not correct")
        }
        ActivationLoginError::Activation(ActivateAccountError::RepositoryError(ref e))
        | ActivationLoginError::SessionFailed(ref e) => {
            tracing::error!(error = %e, "Activation failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::account::application::domain::entities::Role;
    use crate::modules::auth::application::domain::entities::{LoginSession, Principal};
    use crate::modules::auth::application::orchestrator::IActivationLogin;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::test;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Arc;
    use uuid::Uuid;

    struct MockActivation {
        fail: Option<ActivationLoginError>,
    }

    #[async_trait]
    impl IActivationLogin for MockActivation {
        async fn activate_and_login(
            &self,
            command: ActivateAccountCommand,
        ) -> Result<LoginSession, ActivationLoginError> {
            if let Some(e) = &self.fail {
                return Err(e.clone());
            }
            Ok(LoginSession {
                account: Principal {
                    id: command.id(),
                    email: "cook@example.com".to_string(),
                    role: Role::User,
                },
                access_token: "access.jwt".to_string(),
                expires_access: Utc::now(),
                refresh_token: "refresh.jwt".to_string(),
                expires_refresh: Utc::now(),
            })
        }
    }

    fn state(fail: Option<ActivationLoginError>) -> web::Data<AppState> {
        TestAppStateBuilder::default()
            .with_auth(|uc| uc.activation_login = Arc::new(MockActivation { fail }))
            .build()
    }

    #[actix_web::test]
    async fn valid_code_logs_the_account_in() {
        let id = Uuid::new_v4();
        let app = crate::test_app!(state(None), activate_handler);

        let req = test::TestRequest::post()
            .uri("/api/auth/active")
            .set_json(serde_json::json!({"id": id, "code": "123456"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["messageDetail"], "Account is activate successfully");
        assert_eq!(json["data"]["account"]["id"], id.to_string());
        assert_eq!(json["data"]["refreshToken"], "refresh.jwt");
    }

    #[actix_web::test]
    async fn bad_code_is_400() {
        let app = crate::test_app!(
            state(Some(ActivationLoginError::Activation(
                ActivateAccountError::InvalidOrExpiredCode
            ))),
            activate_handler
        );

        let req = test::TestRequest::post()
            .uri("/api/auth/active")
            .set_json(serde_json::json!({"id": Uuid::new_v4(), "code": "123456"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["messageDetail"], "OTP is expired or not correct");
    }

    #[actix_web::test]
    async fn malformed_code_fails_extraction() {
        let app = crate::test_app!(state(None), activate_handler);

        let req = test::TestRequest::post()
            .uri("/api/auth/active")
            .set_json(serde_json::json!({"id": Uuid::new_v4(), "code": "12"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["messageDetail"], "Code must be 6 digits");
    }
}
