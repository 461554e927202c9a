use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

use crate::modules::account::application::domain::entities::Role;
use crate::modules::auth::application::domain::entities::Principal;
use crate::shared::api::ApiResponse;

/// Principal verified by the auth guard for this request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

impl From<Principal> for AuthenticatedUser {
    fn from(p: Principal) -> Self {
        Self {
            id: p.id,
            email: p.email,
            role: p.role,
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Principal>() {
            Some(principal) => ready(Ok(AuthenticatedUser::from(principal.clone()))),
            None => ready(Err(actix_web::error::InternalError::from_response(
                "",
                ApiResponse::unauthorized("User not authenticated"),
            )
            .into())),
        }
    }
}
