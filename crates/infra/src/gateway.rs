//! Record Store Gateway: typed CRUD for one record kind.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::instrument;

use meterops_core::{DomainError, RecordId};
use meterops_records::{Record, RecordKind, Stored};

use crate::store::{Document, DocumentStore, StoreError};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{} {id} not found", .kind.label())]
    NotFound { kind: RecordKind, id: RecordId },

    #[error("invalid record: {0}")]
    Validation(DomainError),

    #[error("store error: {0}")]
    Store(StoreError),

    /// The record service could not be reached or answered unexpectedly.
    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to decode {kind} document: {message}")]
    Decode { kind: RecordKind, message: String },
}

impl GatewayError {
    fn from_store(kind: RecordKind, err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id, .. } => Self::NotFound { kind, id },
            other => Self::Store(other),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// List / get / create / update / delete for records of kind `R`.
#[async_trait]
pub trait RecordGateway<R: Record>: Send + Sync {
    async fn list(&self) -> Result<Vec<Stored<R>>, GatewayError>;

    async fn get(&self, id: RecordId) -> Result<Stored<R>, GatewayError>;

    /// Persist a new record; the store assigns its id.
    async fn create(&self, record: R) -> Result<Stored<R>, GatewayError>;

    /// Replace every field of an existing record, keeping its id.
    async fn update(&self, id: RecordId, record: R) -> Result<Stored<R>, GatewayError>;

    /// Delete a record, returning what was removed.
    async fn delete(&self, id: RecordId) -> Result<Stored<R>, GatewayError>;
}

/// [`RecordGateway`] over a [`DocumentStore`], using `R`'s collection.
pub struct DocumentGateway<R> {
    store: Arc<dyn DocumentStore>,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for DocumentGateway<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> DocumentGateway<R> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    fn collection() -> &'static str {
        R::KIND.collection()
    }

    fn encode(record: &R) -> Result<serde_json::Value, GatewayError> {
        record.validate().map_err(GatewayError::Validation)?;
        serde_json::to_value(record).map_err(|e| GatewayError::Decode {
            kind: R::KIND,
            message: e.to_string(),
        })
    }

    fn decode(doc: Document) -> Result<Stored<R>, GatewayError> {
        let record: R = serde_json::from_value(doc.body).map_err(|e| GatewayError::Decode {
            kind: R::KIND,
            message: format!("{}: {e}", doc.id),
        })?;
        Ok(Stored {
            id: doc.id,
            record,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        })
    }
}

#[async_trait]
impl<R: Record> RecordGateway<R> for DocumentGateway<R> {
    #[instrument(skip(self), fields(collection = R::KIND.collection()), err)]
    async fn list(&self) -> Result<Vec<Stored<R>>, GatewayError> {
        let docs = self
            .store
            .list(Self::collection())
            .await
            .map_err(|e| GatewayError::from_store(R::KIND, e))?;
        docs.into_iter().map(Self::decode).collect()
    }

    #[instrument(skip(self), fields(collection = R::KIND.collection()), err)]
    async fn get(&self, id: RecordId) -> Result<Stored<R>, GatewayError> {
        let doc = self
            .store
            .get(Self::collection(), id)
            .await
            .map_err(|e| GatewayError::from_store(R::KIND, e))?;
        Self::decode(doc)
    }

    #[instrument(skip(self, record), fields(collection = R::KIND.collection()), err)]
    async fn create(&self, record: R) -> Result<Stored<R>, GatewayError> {
        let body = Self::encode(&record)?;
        let doc = self
            .store
            .insert(Self::collection(), body)
            .await
            .map_err(|e| GatewayError::from_store(R::KIND, e))?;
        tracing::info!(id = %doc.id, "record created");
        Self::decode(doc)
    }

    #[instrument(skip(self, record), fields(collection = R::KIND.collection()), err)]
    async fn update(&self, id: RecordId, record: R) -> Result<Stored<R>, GatewayError> {
        let body = Self::encode(&record)?;
        let doc = self
            .store
            .replace(Self::collection(), id, body)
            .await
            .map_err(|e| GatewayError::from_store(R::KIND, e))?;
        tracing::info!("record updated");
        Self::decode(doc)
    }

    #[instrument(skip(self), fields(collection = R::KIND.collection()), err)]
    async fn delete(&self, id: RecordId) -> Result<Stored<R>, GatewayError> {
        let doc = self
            .store
            .remove(Self::collection(), id)
            .await
            .map_err(|e| GatewayError::from_store(R::KIND, e))?;
        tracing::info!("record deleted");
        Self::decode(doc)
    }
}
