// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use serde_json::Value;

/// Uniform body for every response, success or failure.
///
/// The transport status always equals `status_code`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub status_code: u16,
    pub message: String,
    pub message_detail: String,
    pub data: Option<T>,
}

/// Generic text for a status code, used as `message`.
pub fn default_message(status: StatusCode) -> &'static str {
    match status.as_u16() {
        200 => "OK",
        201 => "Created successfully",
        204 => "Successful implementation",
        400 => "Bad request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not found",
        409 => "Conflict",
        423 => "Locked",
        _ => "Internal server error",
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, message_detail: &str, data: Option<T>) -> Self {
        let message = default_message(status).to_string();
        let message_detail = if message_detail.trim().is_empty() {
            message.clone()
        } else {
            message_detail.to_string()
        };

        Self {
            status_code: status.as_u16(),
            message,
            message_detail,
            data,
        }
    }

    pub fn into_response(self) -> HttpResponse {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).json(self)
    }

    pub fn success(message_detail: &str, data: T) -> HttpResponse {
        Self::new(StatusCode::OK, message_detail, Some(data)).into_response()
    }

    /// Error response that still carries a payload, e.g. the conflicting rows.
    pub fn error_with_data(status: StatusCode, message_detail: &str, data: T) -> HttpResponse {
        Self::new(status, message_detail, Some(data)).into_response()
    }
}

impl ApiResponse<Value> {
    pub fn ok(message_detail: &str) -> HttpResponse {
        Self::new(StatusCode::OK, message_detail, None).into_response()
    }

    pub fn error(status: StatusCode, message_detail: &str) -> HttpResponse {
        Self::new(status, message_detail, None).into_response()
    }

    pub fn bad_request(message_detail: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message_detail)
    }

    pub fn unauthorized(message_detail: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, message_detail)
    }

    pub fn forbidden(message_detail: &str) -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, message_detail)
    }

    pub fn not_found(message_detail: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message_detail)
    }

    pub fn conflict(message_detail: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, message_detail)
    }

    /// Detail is never exposed for unexpected failures.
    pub fn internal_error() -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, "")
    }

    pub fn validation_error(message_detail: &str) -> HttpResponse {
        HttpResponse::BadRequest().json(ApiResponse::<Value> {
            status_code: 400,
            message: "Validation error".to_string(),
            message_detail: message_detail.to_string(),
            data: None,
        })
    }
}
