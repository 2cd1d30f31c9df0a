use axum::Router;

use meterops_records::{DemandRecord, InventoryLevel, LabTestResult, Meter, MeterWarranty, Record, StockMovement};

pub mod demands;
pub mod records;
pub mod system;

/// Router for every record kind, each nested at its descriptor route.
pub fn router() -> Router {
    Router::new()
        .nest(Meter::descriptor().route, records::router::<Meter>())
        .nest(LabTestResult::descriptor().route, records::router::<LabTestResult>())
        .nest(InventoryLevel::descriptor().route, records::router::<InventoryLevel>())
        .nest(MeterWarranty::descriptor().route, records::router::<MeterWarranty>())
        .nest(StockMovement::descriptor().route, records::router::<StockMovement>())
        .nest(DemandRecord::descriptor().route, demands::router())
}
