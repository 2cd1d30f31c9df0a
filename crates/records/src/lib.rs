//! Record kinds managed by the dashboard.
//!
//! Six independent flat record shapes, each described by a static
//! [`KindDescriptor`] (collection, route, labels, columns). Everything above
//! this crate is generic over [`Record`] and reads the descriptor instead of
//! hard-coding per-kind behavior.

pub mod demand;
pub mod inventory;
pub mod kind;
pub mod lab;
pub mod lenient;
pub mod meter;
pub mod movement;
pub mod record;
pub mod warranty;

pub use demand::{is_forecast_label, DemandRecord, NEXT_MONTH_LABEL, NEXT_YEAR_LABEL};
pub use inventory::InventoryLevel;
pub use kind::{Align, Column, KindDescriptor, RecordKind};
pub use lab::LabTestResult;
pub use meter::Meter;
pub use movement::StockMovement;
pub use record::{Record, Stored};
pub use warranty::MeterWarranty;
