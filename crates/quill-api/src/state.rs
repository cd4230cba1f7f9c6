//! Shared application state.

use std::sync::Arc;

use quill_core::store::ContentStore;

/// Application state shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The content store every handler delegates to.
    pub store: Arc<dyn ContentStore>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }
}
