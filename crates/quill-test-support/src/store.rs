//! Test stores — mock `ContentStore` implementations for tests.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use quill_core::model::{Content, ContentChanges, ContentId, NewContent};
use quill_core::store::{ContentStore, StoreError};

#[derive(Debug, Default)]
struct Records {
    last_id: i64,
    by_id: BTreeMap<ContentId, Content>,
}

/// A content store held in memory. Ids are assigned from 1 upwards and never
/// reused. Every trait call is counted so tests can assert that validation
/// failures never reached the store.
#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    records: Mutex<Records>,
    calls: AtomicUsize,
}

impl InMemoryContentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `ContentStore` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Returns a copy of every stored record in ascending id order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn snapshot(&self) -> Vec<Content> {
        self.records.lock().unwrap().by_id.values().cloned().collect()
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn list(&self) -> Result<Vec<Content>, StoreError> {
        self.record_call();
        let records = self.records.lock().unwrap();
        Ok(records.by_id.values().rev().cloned().collect())
    }

    async fn find(&self, id: ContentId) -> Result<Option<Content>, StoreError> {
        self.record_call();
        Ok(self.records.lock().unwrap().by_id.get(&id).cloned())
    }

    async fn create(&self, content: NewContent) -> Result<Content, StoreError> {
        self.record_call();
        let mut records = self.records.lock().unwrap();
        records.last_id += 1;
        let created = Content {
            id: ContentId::new(records.last_id),
            title: content.title,
            body: content.body,
        };
        records.by_id.insert(created.id, created.clone());
        Ok(created)
    }

    async fn replace(&self, id: ContentId, content: NewContent) -> Result<Content, StoreError> {
        self.record_call();
        let mut records = self.records.lock().unwrap();
        let existing = records.by_id.get_mut(&id).ok_or(StoreError::NotFound)?;
        existing.title = content.title;
        existing.body = content.body;
        Ok(existing.clone())
    }

    async fn update(
        &self,
        id: ContentId,
        changes: ContentChanges,
    ) -> Result<Content, StoreError> {
        self.record_call();
        let mut records = self.records.lock().unwrap();
        let existing = records.by_id.get_mut(&id).ok_or(StoreError::NotFound)?;
        changes.apply_to(existing);
        Ok(existing.clone())
    }

    async fn delete(&self, id: ContentId) -> Result<(), StoreError> {
        self.record_call();
        let mut records = self.records.lock().unwrap();
        records
            .by_id
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// A content store whose every call fails with the configured error. Useful
/// for testing error-handling paths.
#[derive(Debug)]
pub struct FailingContentStore {
    error: StoreError,
}

impl FailingContentStore {
    /// Creates a store that always fails with `error`.
    #[must_use]
    pub fn new(error: StoreError) -> Self {
        Self { error }
    }

    /// Creates a store that always reports a lost connection.
    #[must_use]
    pub fn connection_refused() -> Self {
        Self::new(StoreError::ConnectionFailure("connection refused".into()))
    }
}

#[async_trait]
impl ContentStore for FailingContentStore {
    async fn list(&self) -> Result<Vec<Content>, StoreError> {
        Err(self.error.clone())
    }

    async fn find(&self, _id: ContentId) -> Result<Option<Content>, StoreError> {
        Err(self.error.clone())
    }

    async fn create(&self, _content: NewContent) -> Result<Content, StoreError> {
        Err(self.error.clone())
    }

    async fn replace(&self, _id: ContentId, _content: NewContent) -> Result<Content, StoreError> {
        Err(self.error.clone())
    }

    async fn update(
        &self,
        _id: ContentId,
        _changes: ContentChanges,
    ) -> Result<Content, StoreError> {
        Err(self.error.clone())
    }

    async fn delete(&self, _id: ContentId) -> Result<(), StoreError> {
        Err(self.error.clone())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(self.error.clone())
    }
}
