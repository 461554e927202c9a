pub mod account_fixtures;
pub mod app_state_builder;
pub mod auth_helper;
pub mod catalog_fixtures;
pub mod recipe_fixtures;
pub mod stubs;

pub fn load_test_env() {
    dotenvy::from_filename(".env.test").ok();
}

/// Service under test behind the production JSON/query/path error
/// handlers and the route guard, signed with the test token keys.
#[macro_export]
macro_rules! test_app {
    ($state:expr, $($svc:expr),+ $(,)?) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($state)
                .app_data($crate::shared::api::custom_json_config())
                .app_data($crate::shared::api::custom_query_config())
                .app_data($crate::shared::api::custom_path_config())
                .wrap($crate::modules::auth::adapter::incoming::web::middleware::AuthGuard::new(
                    $crate::modules::auth::adapter::incoming::web::middleware::RoutePolicies::recipe_api(),
                    std::sync::Arc::new($crate::tests::support::auth_helper::test_token_service()),
                ))
                $(.service($svc))+
        )
        .await
    };
}
