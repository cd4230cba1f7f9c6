//! Quill content API — error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quill_core::error::DomainError;
use quill_core::store::StoreError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database connection or pool error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),

    /// Tracing or OpenTelemetry pipeline setup failed.
    #[error("telemetry error: {0}")]
    Telemetry(String),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around `DomainError` that implements `IntoResponse`.
///
/// This is the single place where failures become status codes. Store
/// failures other than a missing record are logged and reported as a bare
/// `internal error`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    /// The request body could not be decoded.
    #[must_use]
    pub fn invalid_body() -> Self {
        Self(DomainError::Validation("invalid request body".to_owned()))
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::InvalidId | DomainError::Validation(_) => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }
            DomainError::NotFound | DomainError::Store(StoreError::NotFound) => {
                (StatusCode::NOT_FOUND, "not found".to_owned())
            }
            DomainError::Store(err) => {
                tracing::error!(error = %err, "content store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_owned(),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
