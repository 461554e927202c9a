use actix_web::body::EitherBody;
use actix_web::dev::{self, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage, HttpResponse};
use futures::future::{ready, LocalBoxFuture, Ready};
use std::rc::Rc;
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::Principal;
use crate::modules::auth::application::ports::outgoing::{TokenKind, TokenProvider};
use crate::shared::api::ApiResponse;

use super::route_policy::{Access, RoutePolicies};

/// Enforces the route policy table before any handler runs. A verified
/// [`Principal`] is stored in the request extensions.
#[derive(Clone)]
pub struct AuthGuard {
    policies: Rc<RoutePolicies>,
    tokens: Arc<dyn TokenProvider>,
}

impl AuthGuard {
    pub fn new(policies: RoutePolicies, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            policies: Rc::new(policies),
            tokens,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGuardMiddleware {
            service: Rc::new(service),
            policies: self.policies.clone(),
            tokens: self.tokens.clone(),
        }))
    }
}

pub struct AuthGuardMiddleware<S> {
    service: Rc<S>,
    policies: Rc<RoutePolicies>,
    tokens: Arc<dyn TokenProvider>,
}

impl<S> AuthGuardMiddleware<S> {
    fn authorize(&self, req: &ServiceRequest) -> Result<Option<Principal>, HttpResponse> {
        // Percent-decoded the same way the router decodes it.
        let path = req.match_info().as_str();
        let access = self.policies.access_for(req.method(), path);
        if access == Access::Public {
            return Ok(None);
        }

        let token = bearer_token(req)
            .ok_or_else(|| ApiResponse::unauthorized("Token not found or invalid"))?;

        let principal = self
            .tokens
            .verify(token, TokenKind::Access)
            .map_err(|e| {
                tracing::debug!(path = %path, "Access token rejected: {}", e);
                ApiResponse::unauthorized("Invalid or expired token")
            })?;

        if let Access::Roles(roles) = access {
            if !principal.has_role(roles) {
                tracing::warn!(
                    account_id = %principal.id,
                    role = %principal.role,
                    path = %path,
                    "Role not allowed"
                );
                return Err(ApiResponse::forbidden("Insufficient permissions"));
            }
        }

        Ok(Some(principal))
    }
}

fn bearer_token(req: &ServiceRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

impl<S, B> Service<ServiceRequest> for AuthGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match self.authorize(&req) {
            Ok(principal) => {
                if let Some(principal) = principal {
                    req.extensions_mut().insert(principal);
                }
                let svc = self.service.clone();
                Box::pin(async move { svc.call(req).await.map(ServiceResponse::map_into_left_body) })
            }
            Err(response) => {
                let (http_req, _payload) = req.into_parts();
                Box::pin(async move {
                    Ok(ServiceResponse::new(http_req, response).map_into_right_body())
                })
            }
        }
    }
}
