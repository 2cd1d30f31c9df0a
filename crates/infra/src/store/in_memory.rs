use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value as JsonValue;

use meterops_core::RecordId;

use super::{ensure_object, Document, DocumentStore, StoreError};

/// In-memory document store for tests/dev.
///
/// Each collection is a `Vec` kept in insertion order, so `list` returns
/// creation order without relying on id ordering.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    inner: RwLock<HashMap<String, Vec<Document>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("in-memory store lock poisoned".to_string())
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let map = self.inner.read().map_err(poisoned)?;
        Ok(map.get(collection).cloned().unwrap_or_default())
    }

    async fn get(&self, collection: &str, id: RecordId) -> Result<Document, StoreError> {
        let map = self.inner.read().map_err(poisoned)?;
        map.get(collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id))
            .cloned()
            .ok_or_else(|| StoreError::not_found(collection, id))
    }

    async fn insert(&self, collection: &str, body: JsonValue) -> Result<Document, StoreError> {
        ensure_object(&body)?;

        let now = Utc::now();
        let doc = Document {
            id: RecordId::new(),
            body,
            created_at: now,
            updated_at: now,
        };

        let mut map = self.inner.write().map_err(poisoned)?;
        map.entry(collection.to_string()).or_default().push(doc.clone());
        Ok(doc)
    }

    async fn replace(
        &self,
        collection: &str,
        id: RecordId,
        body: JsonValue,
    ) -> Result<Document, StoreError> {
        ensure_object(&body)?;

        let mut map = self.inner.write().map_err(poisoned)?;
        let doc = map
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| d.id == id))
            .ok_or_else(|| StoreError::not_found(collection, id))?;

        doc.body = body;
        doc.updated_at = Utc::now();
        Ok(doc.clone())
    }

    async fn remove(&self, collection: &str, id: RecordId) -> Result<Document, StoreError> {
        let mut map = self.inner.write().map_err(poisoned)?;
        let docs = map
            .get_mut(collection)
            .ok_or_else(|| StoreError::not_found(collection, id))?;
        let pos = docs
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| StoreError::not_found(collection, id))?;
        Ok(docs.remove(pos))
    }
}
