//! Command handlers for content records.
//!
//! Every handler parses the path id first, then validates the command, and
//! only then issues exactly one store call. Validation failures never reach
//! the store.

use quill_core::error::DomainError;
use quill_core::model::{Content, ContentId};
use quill_core::store::ContentStore;

use crate::domain::commands::{CreateContent, PatchContent, ReplaceContent};

/// Handles `CreateContent`: inserts a record and returns it with its new id.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the title is missing or empty, and
/// `DomainError::Store` if the insert fails.
pub async fn handle_create(
    command: CreateContent,
    store: &dyn ContentStore,
) -> Result<Content, DomainError> {
    let fields = command.validate()?;
    let created = store.create(fields).await?;
    tracing::info!(content_id = %created.id, "content created");
    Ok(created)
}

/// Handles `ReplaceContent`: overwrites title and body of an existing record.
///
/// # Errors
///
/// Returns `DomainError::InvalidId` for a malformed id,
/// `DomainError::Validation` if the title is missing or empty, and
/// `DomainError::Store` (including `StoreError::NotFound`) if the write fails.
pub async fn handle_replace(
    raw_id: &str,
    command: ReplaceContent,
    store: &dyn ContentStore,
) -> Result<Content, DomainError> {
    let id = ContentId::parse(raw_id)?;
    let fields = command.validate()?;
    let replaced = store.replace(id, fields).await?;
    tracing::info!(content_id = %id, "content replaced");
    Ok(replaced)
}

/// Handles `PatchContent`: writes only the supplied fields.
///
/// # Errors
///
/// Returns `DomainError::InvalidId` for a malformed id,
/// `DomainError::Validation` if a supplied title is null or empty, and
/// `DomainError::Store` (including `StoreError::NotFound`) if the write fails.
pub async fn handle_patch(
    raw_id: &str,
    command: PatchContent,
    store: &dyn ContentStore,
) -> Result<Content, DomainError> {
    let id = ContentId::parse(raw_id)?;
    let changes = command.validate()?;
    let updated = store.update(id, changes).await?;
    tracing::info!(content_id = %id, "content updated");
    Ok(updated)
}

/// Handles deletion of a record.
///
/// # Errors
///
/// Returns `DomainError::InvalidId` for a malformed id and
/// `DomainError::Store` (including `StoreError::NotFound`) if the delete fails.
pub async fn handle_delete(raw_id: &str, store: &dyn ContentStore) -> Result<(), DomainError> {
    let id = ContentId::parse(raw_id)?;
    store.delete(id).await?;
    tracing::info!(content_id = %id, "content deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use quill_core::error::DomainError;
    use quill_core::model::Content;
    use quill_core::store::{ContentStore, StoreError};
    use quill_test_support::InMemoryContentStore;

    use crate::application::command_handlers::{
        handle_create, handle_delete, handle_patch, handle_replace,
    };
    use crate::domain::commands::{CreateContent, PatchContent, ReplaceContent};

    async fn seed(store: &InMemoryContentStore, title: &str, body: Option<&str>) -> Content {
        handle_create(
            CreateContent {
                title: Some(title.to_owned()),
                body: body.map(str::to_owned),
            },
            store,
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_handle_create_assigns_fresh_ids() {
        // Arrange
        let store = InMemoryContentStore::new();

        // Act
        let first = seed(&store, "A", Some("B")).await;
        let second = seed(&store, "C", None).await;

        // Assert
        assert!(first.id.get() > 0);
        assert_ne!(first.id, second.id);
        assert_eq!(first.title, "A");
        assert_eq!(first.body.as_deref(), Some("B"));
    }

    #[tokio::test]
    async fn test_handle_create_without_title_persists_nothing() {
        let store = InMemoryContentStore::new();

        let result = handle_create(CreateContent::default(), &store).await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(store.calls(), 0);
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_handle_replace_overwrites_both_fields() {
        let store = InMemoryContentStore::new();
        let created = seed(&store, "A", Some("B")).await;

        let replaced = handle_replace(
            &created.id.to_string(),
            ReplaceContent {
                title: Some("T".to_owned()),
                body: None,
            },
            &store,
        )
        .await
        .unwrap();

        assert_eq!(replaced.id, created.id);
        assert_eq!(replaced.title, "T");
        assert_eq!(replaced.body, None);
    }

    #[tokio::test]
    async fn test_handle_replace_without_title_leaves_record_unchanged() {
        let store = InMemoryContentStore::new();
        let created = seed(&store, "A", Some("B")).await;
        let calls_before = store.calls();

        let result = handle_replace(
            &created.id.to_string(),
            ReplaceContent {
                title: None,
                body: Some("X".to_owned()),
            },
            &store,
        )
        .await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(store.calls(), calls_before);
        assert_eq!(store.snapshot(), vec![created]);
    }

    #[tokio::test]
    async fn test_handle_replace_checks_id_before_title() {
        let store = InMemoryContentStore::new();

        let result = handle_replace("abc", ReplaceContent::default(), &store).await;

        assert!(matches!(result, Err(DomainError::InvalidId)));
    }

    #[tokio::test]
    async fn test_handle_patch_keeps_omitted_fields() {
        let store = InMemoryContentStore::new();
        let created = seed(&store, "A", Some("B")).await;

        let updated = handle_patch(
            &created.id.to_string(),
            PatchContent {
                title: None,
                body: Some(Some("C".to_owned())),
            },
            &store,
        )
        .await
        .unwrap();

        assert_eq!(updated.title, "A");
        assert_eq!(updated.body.as_deref(), Some("C"));
    }

    #[tokio::test]
    async fn test_handle_patch_on_missing_record_is_not_found() {
        let store = InMemoryContentStore::new();

        let result = handle_patch("7", PatchContent::default(), &store).await;

        match result {
            Err(err) => assert!(err.is_not_found(), "expected not found, got {err:?}"),
            Ok(content) => panic!("expected error, got {content:?}"),
        }
    }

    #[tokio::test]
    async fn test_handle_delete_twice_reports_not_found() {
        let store = InMemoryContentStore::new();
        let created = seed(&store, "A", None).await;
        let raw_id = created.id.to_string();

        handle_delete(&raw_id, &store).await.unwrap();
        let second = handle_delete(&raw_id, &store).await;

        assert!(matches!(
            second,
            Err(DomainError::Store(StoreError::NotFound))
        ));
        assert_eq!(store.find(created.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_handle_delete_rejects_fractional_id() {
        let store = InMemoryContentStore::new();

        let result = handle_delete("1.5", &store).await;

        assert!(matches!(result, Err(DomainError::InvalidId)));
        assert_eq!(store.calls(), 0);
    }
}
