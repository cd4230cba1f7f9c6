//! Domain error types.

use thiserror::Error;

use crate::store::StoreError;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A path id did not denote a whole integer.
    #[error("invalid id")]
    InvalidId,

    /// Request input failed validation before reaching the store.
    #[error("{0}")]
    Validation(String),

    /// The requested content does not exist.
    #[error("not found")]
    NotFound,

    /// The content store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl DomainError {
    /// Shorthand for the missing-title validation failure.
    #[must_use]
    pub fn title_required() -> Self {
        Self::Validation("title is required".to_owned())
    }

    /// Returns `true` when the error means the targeted record is absent,
    /// whether detected by a lookup or reported by the store.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound | Self::Store(StoreError::NotFound))
    }
}
