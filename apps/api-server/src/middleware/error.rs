//! Error handling for plain HTTP routes - RFC 7807 compliant responses.

use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use postboard_shared::ErrorResponse;
use std::fmt;

use crate::observability::RequestId;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Unavailable(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Unavailable(msg) => write!(f, "Unavailable: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::Unavailable(detail) => {
                tracing::error!("Dependency unavailable: {}", detail);
                ErrorResponse::service_unavailable("Storage backend is not reachable")
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Fallback for unknown routes.
pub async fn not_found(req: HttpRequest, request_id: RequestId) -> HttpResponse {
    let body = ErrorResponse::not_found(format!("No route for {} {}", req.method(), req.path()))
        .with_request_id(request_id.as_str());

    HttpResponse::NotFound().json(body)
}
