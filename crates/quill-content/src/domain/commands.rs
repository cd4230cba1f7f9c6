//! Commands for content records.
//!
//! Each command is the decoded request body of one write operation. Fields
//! are optional at this level so that missing input surfaces as a validation
//! error with a stable message rather than a decoding failure.

use quill_core::error::DomainError;
use quill_core::model::{ContentChanges, NewContent};
use serde::{Deserialize, Deserializer};

/// Distinguishes an explicit `null` from an absent field.
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn require_title(title: Option<String>) -> Result<String, DomainError> {
    match title {
        Some(title) if !title.is_empty() => Ok(title),
        _ => Err(DomainError::title_required()),
    }
}

/// Command to create a content record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateContent {
    /// Required title.
    pub title: Option<String>,
    /// Optional body.
    pub body: Option<String>,
}

impl CreateContent {
    /// Validates the command into the fields to insert.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the title is missing or empty.
    pub fn validate(self) -> Result<NewContent, DomainError> {
        Ok(NewContent {
            title: require_title(self.title)?,
            body: self.body,
        })
    }
}

/// Command to overwrite a content record. An omitted body clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplaceContent {
    /// Required title.
    pub title: Option<String>,
    /// Optional body.
    pub body: Option<String>,
}

impl ReplaceContent {
    /// Validates the command into the full field set to write.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the title is missing or empty.
    pub fn validate(self) -> Result<NewContent, DomainError> {
        Ok(NewContent {
            title: require_title(self.title)?,
            body: self.body,
        })
    }
}

/// Command to change some fields of a content record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchContent {
    /// Replacement title. Present-but-null is kept apart from absent.
    #[serde(default, deserialize_with = "explicit_null")]
    pub title: Option<Option<String>>,
    /// Replacement body. `null` clears the stored body.
    #[serde(default, deserialize_with = "explicit_null")]
    pub body: Option<Option<String>>,
}

impl PatchContent {
    /// Validates the command into the sparse set of changes.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if a title is supplied but null or
    /// empty; a stored title may never become empty.
    pub fn validate(self) -> Result<ContentChanges, DomainError> {
        let title = match self.title {
            None => None,
            Some(title) => Some(require_title(title)?),
        };
        Ok(ContentChanges {
            title,
            body: self.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_non_empty_title() {
        let missing: CreateContent = serde_json::from_value(serde_json::json!({"body": "B"})).unwrap();
        let empty: CreateContent = serde_json::from_value(serde_json::json!({"title": ""})).unwrap();

        for command in [missing, empty] {
            match command.validate() {
                Err(DomainError::Validation(message)) => assert_eq!(message, "title is required"),
                other => panic!("expected Validation, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_replace_without_body_clears_it() {
        let command: ReplaceContent =
            serde_json::from_value(serde_json::json!({"title": "A"})).unwrap();

        let fields = command.validate().unwrap();

        assert_eq!(
            fields,
            NewContent {
                title: "A".to_owned(),
                body: None,
            }
        );
    }

    #[test]
    fn test_patch_tells_absent_body_from_null_body() {
        let absent: PatchContent = serde_json::from_value(serde_json::json!({"title": "T"})).unwrap();
        let null: PatchContent = serde_json::from_value(serde_json::json!({"body": null})).unwrap();
        let set: PatchContent = serde_json::from_value(serde_json::json!({"body": "C"})).unwrap();

        assert_eq!(
            absent.validate().unwrap(),
            ContentChanges {
                title: Some("T".to_owned()),
                body: None,
            }
        );
        assert_eq!(null.validate().unwrap().body, Some(None));
        assert_eq!(set.validate().unwrap().body, Some(Some("C".to_owned())));
    }

    #[test]
    fn test_patch_with_empty_object_changes_nothing() {
        let command: PatchContent = serde_json::from_value(serde_json::json!({})).unwrap();

        assert!(command.validate().unwrap().is_empty());
    }

    #[test]
    fn test_patch_rejects_blanking_the_title() {
        for payload in [serde_json::json!({"title": ""}), serde_json::json!({"title": null})] {
            let command: PatchContent = serde_json::from_value(payload).unwrap();
            assert!(matches!(command.validate(), Err(DomainError::Validation(_))));
        }
    }
}
