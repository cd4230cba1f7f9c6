//! `PostgreSQL` implementation of the `ContentStore` trait.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::error::ErrorKind;

use quill_core::model::{Content, ContentChanges, ContentId, NewContent};
use quill_core::store::{ContentStore, StoreError};

/// Row shape of the `contents` table.
#[derive(Debug, sqlx::FromRow)]
struct ContentRow {
    id: i64,
    title: String,
    body: Option<String>,
}

impl From<ContentRow> for Content {
    fn from(row: ContentRow) -> Self {
        Self {
            id: ContentId::new(row.id),
            title: row.title,
            body: row.body,
        }
    }
}

/// Classifies a driver error into the store's error taxonomy.
fn classify(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::RowNotFound => StoreError::NotFound,
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation => StoreError::ConstraintViolation(db_err.to_string()),
            _ => StoreError::Unknown(db_err.to_string()),
        },
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => {
            tracing::warn!(error = %err, "content store connection failure");
            StoreError::ConnectionFailure(err.to_string())
        }
        other => StoreError::Unknown(other.to_string()),
    }
}

/// PostgreSQL-backed content store.
#[derive(Debug, Clone)]
pub struct PgContentStore {
    pool: PgPool,
}

impl PgContentStore {
    /// Creates a new `PgContentStore`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentStore for PgContentStore {
    async fn list(&self) -> Result<Vec<Content>, StoreError> {
        let rows: Vec<ContentRow> =
            sqlx::query_as("SELECT id, title, body FROM contents ORDER BY id DESC")
                .fetch_all(&self.pool)
                .await
                .map_err(classify)?;
        Ok(rows.into_iter().map(Content::from).collect())
    }

    async fn find(&self, id: ContentId) -> Result<Option<Content>, StoreError> {
        let row: Option<ContentRow> =
            sqlx::query_as("SELECT id, title, body FROM contents WHERE id = $1")
                .bind(id.get())
                .fetch_optional(&self.pool)
                .await
                .map_err(classify)?;
        Ok(row.map(Content::from))
    }

    async fn create(&self, content: NewContent) -> Result<Content, StoreError> {
        let row: ContentRow = sqlx::query_as(
            "INSERT INTO contents (title, body) VALUES ($1, $2) RETURNING id, title, body",
        )
        .bind(content.title)
        .bind(content.body)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;
        Ok(row.into())
    }

    async fn replace(&self, id: ContentId, content: NewContent) -> Result<Content, StoreError> {
        let row: Option<ContentRow> = sqlx::query_as(
            "UPDATE contents SET title = $2, body = $3 WHERE id = $1 RETURNING id, title, body",
        )
        .bind(id.get())
        .bind(content.title)
        .bind(content.body)
        .fetch_optional(&self.pool)
        .await
        .map_err(classify)?;
        row.map(Content::from).ok_or(StoreError::NotFound)
    }

    async fn update(
        &self,
        id: ContentId,
        changes: ContentChanges,
    ) -> Result<Content, StoreError> {
        let (body_supplied, body) = match changes.body {
            Some(body) => (true, body),
            None => (false, None),
        };
        let row: Option<ContentRow> = sqlx::query_as(
            r"
UPDATE contents
SET title = COALESCE($2, title),
    body  = CASE WHEN $3 THEN $4 ELSE body END
WHERE id = $1
RETURNING id, title, body
",
        )
        .bind(id.get())
        .bind(changes.title)
        .bind(body_supplied)
        .bind(body)
        .fetch_optional(&self.pool)
        .await
        .map_err(classify)?;
        row.map(Content::from).ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: ContentId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM contents WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(classify)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(classify)?;
        Ok(())
    }
}
