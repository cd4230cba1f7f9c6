//! Query handlers for content records.

use quill_core::error::DomainError;
use quill_core::model::{Content, ContentId};
use quill_core::store::ContentStore;

/// Lists every content record, newest id first.
///
/// # Errors
///
/// Returns `DomainError::Store` if the store fails.
pub async fn list_contents(store: &dyn ContentStore) -> Result<Vec<Content>, DomainError> {
    Ok(store.list().await?)
}

/// Retrieves a content record by its raw path id.
///
/// # Errors
///
/// Returns `DomainError::InvalidId` if `raw_id` is not a whole integer,
/// `DomainError::NotFound` if no record has that id, and
/// `DomainError::Store` if the store fails.
pub async fn get_content(raw_id: &str, store: &dyn ContentStore) -> Result<Content, DomainError> {
    let id = ContentId::parse(raw_id)?;
    store.find(id).await?.ok_or(DomainError::NotFound)
}
