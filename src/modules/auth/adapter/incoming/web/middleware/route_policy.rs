use actix_web::http::Method;

use crate::modules::account::application::domain::entities::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Roles(&'static [Role]),
}

#[derive(Debug, Clone)]
pub struct RoutePolicy {
    method: Method,
    pattern: &'static str,
    access: Access,
}

impl RoutePolicy {
    pub fn new(method: Method, pattern: &'static str, access: Access) -> Self {
        Self {
            method,
            pattern,
            access,
        }
    }

    fn matches(&self, method: &Method, path: &str) -> bool {
        &self.method == method && pattern_matches(self.pattern, path)
    }
}

/// `{name}` segments match any single non-empty segment.
fn pattern_matches(pattern: &str, path: &str) -> bool {
    let path = match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    };

    let mut pattern_segments = pattern.split('/');
    let mut path_segments = path.split('/');
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(p), Some(s)) => {
                let is_param = p.starts_with('{') && p.ends_with('}');
                if !((is_param && !s.is_empty()) || p == s) {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

const ADMIN: &[Role] = &[Role::Admin];
const STAFF: &[Role] = &[Role::Staff];
const STAFF_OR_ADMIN: &[Role] = &[Role::Staff, Role::Admin];
const AUTHOR: &[Role] = &[Role::User, Role::Staff];

/// Ordered policy table; the first matching entry wins and unlisted
/// routes require a valid access token.
#[derive(Debug, Clone)]
pub struct RoutePolicies(Vec<RoutePolicy>);

impl RoutePolicies {
    pub fn new(policies: Vec<RoutePolicy>) -> Self {
        Self(policies)
    }

    pub fn access_for(&self, method: &Method, path: &str) -> Access {
        self.0
            .iter()
            .find(|policy| policy.matches(method, path))
            .map(|policy| policy.access)
            .unwrap_or(Access::Authenticated)
    }

    pub fn recipe_api() -> Self {
        use Access::*;

        let get = Method::GET;
        let post = Method::POST;
        let put = Method::PUT;
        let patch = Method::PATCH;
        let delete = Method::DELETE;

        Self::new(vec![
            RoutePolicy::new(get.clone(), "/health", Public),
            RoutePolicy::new(get.clone(), "/ready", Public),
            // auth
            RoutePolicy::new(post.clone(), "/api/auth/login", Public),
            RoutePolicy::new(post.clone(), "/api/auth/register", Public),
            RoutePolicy::new(post.clone(), "/api/auth/active", Public),
            RoutePolicy::new(post.clone(), "/api/auth/request-active", Public),
            RoutePolicy::new(post.clone(), "/api/auth/forgot-password/request", Public),
            RoutePolicy::new(post.clone(), "/api/auth/forgot-password/reset", Public),
            RoutePolicy::new(post.clone(), "/api/auth/refresh", Public),
            RoutePolicy::new(get.clone(), "/api/auth/google/login", Public),
            RoutePolicy::new(get.clone(), "/api/auth/google/callback", Public),
            RoutePolicy::new(post.clone(), "/api/auth/change-password", Authenticated),
            RoutePolicy::new(post.clone(), "/api/auth/logout", Authenticated),
            // accounts; literal paths before parameterized ones
            RoutePolicy::new(get.clone(), "/api/accounts/profile", Authenticated),
            RoutePolicy::new(put.clone(), "/api/accounts/profile", Authenticated),
            RoutePolicy::new(put.clone(), "/api/accounts/{userId}/handle-ban", Roles(ADMIN)),
            RoutePolicy::new(post.clone(), "/api/accounts", Roles(ADMIN)),
            RoutePolicy::new(get.clone(), "/api/accounts", Roles(STAFF_OR_ADMIN)),
            RoutePolicy::new(get.clone(), "/api/accounts/{id}", Roles(STAFF_OR_ADMIN)),
            RoutePolicy::new(put.clone(), "/api/accounts/{id}", Roles(ADMIN)),
            RoutePolicy::new(delete, "/api/accounts/{id}", Roles(ADMIN)),
            // catalog
            RoutePolicy::new(post.clone(), "/api/recipes", Roles(AUTHOR)),
            RoutePolicy::new(get.clone(), "/api/recipes", Public),
            RoutePolicy::new(post.clone(), "/api/tags", Roles(STAFF)),
            RoutePolicy::new(patch.clone(), "/api/tags", Roles(STAFF)),
            RoutePolicy::new(get.clone(), "/api/tags", Public),
            RoutePolicy::new(post, "/api/ingredients", Roles(STAFF)),
            RoutePolicy::new(patch, "/api/ingredients", Roles(STAFF)),
            RoutePolicy::new(get, "/api/ingredients", Public),
        ])
    }
}
