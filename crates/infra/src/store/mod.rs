//! Schema-less document storage.
//!
//! Documents are JSON objects grouped into named collections. The store
//! assigns each document a [`RecordId`] on insert and maintains its
//! timestamps; it knows nothing about record shapes.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use thiserror::Error;

use meterops_core::RecordId;

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryDocumentStore;
pub use postgres::PostgresDocumentStore;

/// A stored JSON document and its bookkeeping fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: RecordId,
    pub body: JsonValue,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no document {id} in collection {collection}")]
    NotFound { collection: String, id: RecordId },

    #[error("document body must be a JSON object")]
    InvalidBody,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn not_found(collection: &str, id: RecordId) -> Self {
        Self::NotFound {
            collection: collection.to_string(),
            id,
        }
    }
}

/// Collection-scoped CRUD over JSON documents.
///
/// `list` returns documents in creation order. `replace` swaps the whole body
/// and keeps id and `created_at`. Writes are last-write-wins; there is no
/// version check.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    async fn get(&self, collection: &str, id: RecordId) -> Result<Document, StoreError>;

    async fn insert(&self, collection: &str, body: JsonValue) -> Result<Document, StoreError>;

    async fn replace(
        &self,
        collection: &str,
        id: RecordId,
        body: JsonValue,
    ) -> Result<Document, StoreError>;

    /// Delete a document, returning what was removed.
    async fn remove(&self, collection: &str, id: RecordId) -> Result<Document, StoreError>;
}

#[async_trait]
impl<S> DocumentStore for Arc<S>
where
    S: DocumentStore + ?Sized,
{
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        (**self).list(collection).await
    }

    async fn get(&self, collection: &str, id: RecordId) -> Result<Document, StoreError> {
        (**self).get(collection, id).await
    }

    async fn insert(&self, collection: &str, body: JsonValue) -> Result<Document, StoreError> {
        (**self).insert(collection, body).await
    }

    async fn replace(
        &self,
        collection: &str,
        id: RecordId,
        body: JsonValue,
    ) -> Result<Document, StoreError> {
        (**self).replace(collection, id, body).await
    }

    async fn remove(&self, collection: &str, id: RecordId) -> Result<Document, StoreError> {
        (**self).remove(collection, id).await
    }
}

fn ensure_object(body: &JsonValue) -> Result<(), StoreError> {
    if body.is_object() {
        Ok(())
    } else {
        Err(StoreError::InvalidBody)
    }
}
