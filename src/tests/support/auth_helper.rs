use uuid::Uuid;

use crate::modules::account::application::domain::entities::Role;
use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::domain::entities::Principal;
use crate::modules::auth::application::ports::outgoing::{TokenKind, TokenProvider};

pub const TEST_ACCESS_SECRET: &str = "test_access_secret_for_testing_only_0001";
pub const TEST_REFRESH_SECRET: &str = "test_refresh_secret_for_testing_only_0002";

pub fn test_token_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        access_secret: TEST_ACCESS_SECRET.to_string(),
        refresh_secret: TEST_REFRESH_SECRET.to_string(),
        access_token_expiry: 900,
        refresh_token_expiry: 604_800,
    })
}

/// Fresh principal with the given role and its `Authorization` header value.
pub fn bearer_for(role: Role) -> (Principal, String) {
    let principal = Principal {
        id: Uuid::new_v4(),
        email: format!("{}@example.com", role.as_str().to_lowercase()),
        role,
    };
    let token = test_token_service()
        .issue(&principal, TokenKind::Access)
        .expect("test token");
    (principal, format!("Bearer {}", token.token))
}
