use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use meterops_forecast::demand_table_view;
use meterops_infra::RecordGateway;
use meterops_records::DemandRecord;

use crate::app::errors;
use crate::app::routes::records;
use crate::app::services::AppServices;

/// Demand CRUD plus the computed forecast view.
pub fn router() -> Router {
    records::router::<DemandRecord>().route("/forecast", get(forecast))
}

/// History, forecast rows and averages, recomputed from the current store contents.
pub async fn forecast(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.gateway::<DemandRecord>().list().await {
        Ok(history) => (StatusCode::OK, Json(demand_table_view(&history))).into_response(),
        Err(e) => errors::gateway_error_to_response(e),
    }
}
