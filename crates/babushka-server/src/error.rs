//! HTTP Error Mapping
//!
//! Every failure crossing the handler boundary becomes an [`ApiError`] and
//! is rendered as an HTTP status plus a fixed-shape `{"detail": ...}` body.
//! Nothing is retried.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use babushka::domain::{AdvisorError, StoreError};

/// Fixed-shape error body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}

/// Handler-boundary error: a status code plus a user-facing detail message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, detail)
    }

    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, detail)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

impl From<AdvisorError> for ApiError {
    fn from(err: AdvisorError) -> Self {
        match err {
            AdvisorError::AuthFailed => Self::new(
                StatusCode::UNAUTHORIZED,
                "Upstream authentication failed: check the configured Anthropic API key",
            ),
            AdvisorError::RateLimited => Self::new(
                StatusCode::TOO_MANY_REQUESTS,
                "The advice service is rate limited, please try again shortly",
            ),
            AdvisorError::Api { ref message, .. } => Self::new(
                StatusCode::BAD_GATEWAY,
                format!("Upstream API error: {}", message),
            ),
            AdvisorError::Request(_) | AdvisorError::InvalidResponse(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error generating advice: {}", err),
            ),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}
