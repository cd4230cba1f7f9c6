//! Quill content API — HTTP surface over the content store.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod shutdown;
pub mod state;
pub mod telemetry;

use axum::http::{Method, StatusCode};
use axum::{Json, Router};
use quill_core::error::DomainError;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{ApiError, ErrorBody};
use crate::state::AppState;

/// Cross-origin policy: any origin, any request header, the CRUD methods.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

async fn route_not_found() -> ApiError {
    ApiError(DomainError::NotFound)
}

async fn method_not_allowed() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody {
            message: "method not allowed".to_owned(),
        }),
    )
}

/// Builds the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::root::router())
        .merge(routes::health::router())
        .merge(routes::contents::router())
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}
