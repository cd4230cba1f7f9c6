//! Content model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Store-assigned identifier of a content record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(i64);

impl ContentId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Parses a path segment into an id.
    ///
    /// The segment is accepted only when it denotes a whole number: plain
    /// integers as well as integral numeric literals such as `1.0` or `1e3`.
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidId` for empty input, non-numeric text,
    /// fractional or non-finite values, and values outside the `i64` range.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidId);
        }
        if let Ok(id) = trimmed.parse::<i64>() {
            return Ok(Self(id));
        }

        let value: f64 = trimmed.parse().map_err(|_| DomainError::InvalidId)?;
        let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
        if value.is_finite() && value.fract() == 0.0 && in_range {
            Ok(Self(value as i64))
        } else {
            Err(DomainError::InvalidId)
        }
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A persisted content record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// Store-assigned identifier.
    pub id: ContentId,
    /// Required, non-empty title.
    pub title: String,
    /// Optional body text.
    pub body: Option<String>,
}

/// Full field set written by create and replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContent {
    /// Non-empty title.
    pub title: String,
    /// Body text; `None` stores null.
    pub body: Option<String>,
}

/// Sparse field set written by a partial update.
///
/// `None` leaves the stored value untouched. For `body`, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentChanges {
    /// Replacement title, if supplied.
    pub title: Option<String>,
    /// Replacement body, if supplied.
    pub body: Option<Option<String>>,
}

impl ContentChanges {
    /// Returns `true` when no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none()
    }

    /// Applies the changes to a record in place.
    pub fn apply_to(self, content: &mut Content) {
        if let Some(title) = self.title {
            content.title = title;
        }
        if let Some(body) = self.body {
            content.body = body;
        }
    }
}
