pub mod auth_guard;
pub mod route_policy;

pub use auth_guard::AuthGuard;
pub use route_policy::{Access, RoutePolicies, RoutePolicy};
