//! `meterops-dashboard`
//!
//! View state and refresh control for the record tables. Every table is a
//! [`ResourceTable`] over some [`RecordGateway`](meterops_infra::RecordGateway);
//! the demand table adds the forecast rows. Rendering is a pure function of
//! the state.

pub mod demand;
pub mod http;
pub mod render;
pub mod state;
pub mod table;

pub use demand::DemandTable;
pub use http::HttpGateway;
pub use render::{render, RenderedRow, RenderedTable, RowAction};
pub use state::{Modal, Notification, NotificationLevel, TableState};
pub use table::ResourceTable;
