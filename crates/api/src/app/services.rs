use std::sync::Arc;

use anyhow::Context;

use meterops_infra::{DocumentGateway, DocumentStore, InMemoryDocumentStore, PostgresDocumentStore};
use meterops_records::Record;

use crate::config::ApiConfig;

/// Shared handler state: one document store behind every record kind.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn DocumentStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryDocumentStore::new()))
    }

    pub fn gateway<R: Record>(&self) -> DocumentGateway<R> {
        DocumentGateway::new(self.store.clone())
    }
}

/// Connect the configured store: Postgres when a database URL is set, memory otherwise.
pub async fn build_services(config: &ApiConfig) -> anyhow::Result<AppServices> {
    let Some(db) = &config.database else {
        tracing::info!("using in-memory document store");
        return Ok(AppServices::in_memory());
    };

    let store = PostgresDocumentStore::connect(&db.url, db.max_connections)
        .await
        .context("failed to connect to postgres")?;
    store
        .ensure_schema()
        .await
        .context("failed to prepare document schema")?;

    tracing::info!(max_connections = db.max_connections, "using postgres document store");
    Ok(AppServices::new(Arc::new(store)))
}
