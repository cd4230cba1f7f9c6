//! Content store abstraction.

use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Content, ContentChanges, ContentId, NewContent};

/// Failure reported by a content store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The targeted record does not exist.
    #[error("record not found")]
    NotFound,

    /// The write violated a schema constraint.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// The store could not be reached.
    #[error("connection failure: {0}")]
    ConnectionFailure(String),

    /// Any other store failure.
    #[error("unknown store error: {0}")]
    Unknown(String),
}

/// Persistence operations over content records.
#[async_trait]
pub trait ContentStore: Send + Sync + Debug {
    /// Loads every record, ordered by id descending.
    async fn list(&self) -> Result<Vec<Content>, StoreError>;

    /// Loads a single record, `None` if absent.
    async fn find(&self, id: ContentId) -> Result<Option<Content>, StoreError>;

    /// Inserts a record and returns it with its assigned id.
    async fn create(&self, content: NewContent) -> Result<Content, StoreError>;

    /// Overwrites both title and body of an existing record.
    ///
    /// Fails with `StoreError::NotFound` if the record is absent.
    async fn replace(&self, id: ContentId, content: NewContent) -> Result<Content, StoreError>;

    /// Writes only the supplied fields of an existing record.
    ///
    /// Fails with `StoreError::NotFound` if the record is absent.
    async fn update(&self, id: ContentId, changes: ContentChanges)
    -> Result<Content, StoreError>;

    /// Removes a record.
    ///
    /// Fails with `StoreError::NotFound` if the record is absent.
    async fn delete(&self, id: ContentId) -> Result<(), StoreError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
