//! Infrastructure layer: document storage and the typed record gateway.

pub mod gateway;
pub mod store;

pub use gateway::{DocumentGateway, GatewayError, RecordGateway};
pub use store::{Document, DocumentStore, InMemoryDocumentStore, PostgresDocumentStore, StoreError};
