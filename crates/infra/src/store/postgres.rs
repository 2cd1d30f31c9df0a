//! Postgres-backed document store.
//!
//! All collections share one `documents` table keyed by `(collection, id)`;
//! bodies are stored as JSONB. `ensure_schema` creates the table on startup.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use meterops_core::RecordId;

use super::{ensure_object, Document, DocumentStore, StoreError};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS documents (
        collection TEXT        NOT NULL,
        id         UUID        NOT NULL,
        body       JSONB       NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        PRIMARY KEY (collection, id)
    )
"#;

const CREATE_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS documents_collection_created_at
        ON documents (collection, created_at)
"#;

#[derive(Debug, Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl PostgresDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `url`.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Create the `documents` table and its index if missing.
    #[instrument(skip(self), err)]
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_INDEX).execute(&self.pool).await?;
        Ok(())
    }
}

fn document_from_row(row: &PgRow) -> Result<Document, StoreError> {
    let id: Uuid = row.try_get("id")?;
    let body: JsonValue = row.try_get("body")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at")?;
    Ok(Document {
        id: RecordId::from_uuid(id),
        body,
        created_at,
        updated_at,
    })
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    #[instrument(skip(self), err)]
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, body, created_at, updated_at
            FROM documents
            WHERE collection = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(document_from_row).collect()
    }

    #[instrument(skip(self), err)]
    async fn get(&self, collection: &str, id: RecordId) -> Result<Document, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, body, created_at, updated_at
            FROM documents
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(collection)
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => document_from_row(&row),
            None => Err(StoreError::not_found(collection, id)),
        }
    }

    #[instrument(skip(self, body), err)]
    async fn insert(&self, collection: &str, body: JsonValue) -> Result<Document, StoreError> {
        ensure_object(&body)?;

        let id = RecordId::new();
        let row = sqlx::query(
            r#"
            INSERT INTO documents (collection, id, body)
            VALUES ($1, $2, $3)
            RETURNING id, body, created_at, updated_at
            "#,
        )
        .bind(collection)
        .bind(id.as_uuid())
        .bind(sqlx::types::Json(&body))
        .fetch_one(&self.pool)
        .await?;

        document_from_row(&row)
    }

    #[instrument(skip(self, body), err)]
    async fn replace(
        &self,
        collection: &str,
        id: RecordId,
        body: JsonValue,
    ) -> Result<Document, StoreError> {
        ensure_object(&body)?;

        let row = sqlx::query(
            r#"
            UPDATE documents
            SET body = $3, updated_at = NOW()
            WHERE collection = $1 AND id = $2
            RETURNING id, body, created_at, updated_at
            "#,
        )
        .bind(collection)
        .bind(id.as_uuid())
        .bind(sqlx::types::Json(&body))
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => document_from_row(&row),
            None => Err(StoreError::not_found(collection, id)),
        }
    }

    #[instrument(skip(self), err)]
    async fn remove(&self, collection: &str, id: RecordId) -> Result<Document, StoreError> {
        let row = sqlx::query(
            r#"
            DELETE FROM documents
            WHERE collection = $1 AND id = $2
            RETURNING id, body, created_at, updated_at
            "#,
        )
        .bind(collection)
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => document_from_row(&row),
            None => Err(StoreError::not_found(collection, id)),
        }
    }
}
