//! Root greeting endpoint.

use axum::{Router, routing::get};

use crate::state::AppState;

/// GET /
async fn hello() -> &'static str {
    "Hello World"
}

/// Returns the root router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(hello))
}
