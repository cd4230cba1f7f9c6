//! Shared test stores and utilities for the Quill content service.

mod store;

pub use store::{FailingContentStore, InMemoryContentStore};
