//! `meterops-forecast`
//!
//! Demand forecasting over the persisted demand history.
//!
//! Model: the mean of each incident count across all recorded periods is
//! taken as the expected count for one future period. Next month is one
//! period, next year twelve. This assumes a stationary series: no trend, no
//! seasonality, every period weighted equally. It is a rough planning aid,
//! not a statistical forecast.

pub mod averages;
pub mod projection;
pub mod view;

pub use averages::{compute_averages, Averages};
pub use projection::{project, project_next_month, project_next_year, DemandForecast, Horizon};
pub use view::{demand_table_view, is_forecast_row, DemandRow, DemandTableView};

pub use meterops_records::{is_forecast_label, NEXT_MONTH_LABEL, NEXT_YEAR_LABEL};
