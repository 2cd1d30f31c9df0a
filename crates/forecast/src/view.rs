use serde::Serialize;

use meterops_core::RecordId;
use meterops_records::{is_forecast_label, Column, DemandRecord, Record, Stored};

use crate::averages::Averages;
use crate::projection::DemandForecast;

/// One row of the demand table, historical or forecast.
///
/// Historical rows carry the record id; forecast rows never do. Counts are
/// `u64` so a year projection of `u32` inputs is never clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandRow {
    pub id: Option<RecordId>,
    pub date: String,
    pub faulty_program: u64,
    pub meter_complaint: u64,
    pub meter_leak: u64,
}

impl DemandRow {
    pub fn from_stored(stored: &Stored<DemandRecord>) -> Self {
        Self {
            id: Some(stored.id),
            date: stored.record.date.clone(),
            faulty_program: u64::from(stored.record.faulty_program),
            meter_complaint: u64::from(stored.record.meter_complaint),
            meter_leak: u64::from(stored.record.meter_leak),
        }
    }

    /// Forecast rows are recognised by their sentinel date label alone.
    pub fn is_forecast(&self) -> bool {
        is_forecast_label(&self.date)
    }

    /// The id to act on, or `None` for rows that cannot be viewed, edited or
    /// deleted.
    pub fn action_target(&self) -> Option<RecordId> {
        if self.is_forecast() {
            return None;
        }
        self.id
    }
}

/// Demand table as displayed: history followed by the two forecast rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemandTableView {
    pub columns: &'static [Column],
    pub rows: Vec<DemandRow>,
    pub averages: Averages,
}

impl DemandTableView {
    /// Assemble a view from a history and a forecast already derived from it.
    pub fn with_forecast(history: &[Stored<DemandRecord>], forecast: DemandForecast) -> Self {
        let mut rows: Vec<DemandRow> = history.iter().map(DemandRow::from_stored).collect();
        rows.push(forecast.next_month);
        rows.push(forecast.next_year);

        Self {
            columns: DemandRecord::descriptor().columns,
            rows,
            averages: forecast.averages,
        }
    }

    pub fn historical_rows(&self) -> impl Iterator<Item = &DemandRow> {
        self.rows.iter().filter(|r| !r.is_forecast())
    }

    pub fn forecast_rows(&self) -> impl Iterator<Item = &DemandRow> {
        self.rows.iter().filter(|r| r.is_forecast())
    }
}

/// True for the synthetic next-month / next-year rows.
pub fn is_forecast_row(row: &DemandRow) -> bool {
    row.is_forecast()
}

/// Build the table view from the current history.
pub fn demand_table_view(history: &[Stored<DemandRecord>]) -> DemandTableView {
    DemandTableView::with_forecast(history, DemandForecast::from_history(history))
}
