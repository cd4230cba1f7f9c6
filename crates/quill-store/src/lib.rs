//! Quill Store — PostgreSQL persistence for content records.

pub mod pg_content_store;

pub use pg_content_store::PgContentStore;
