use serde::Serialize;

use meterops_records::{DemandRecord, Stored, NEXT_MONTH_LABEL, NEXT_YEAR_LABEL};

use crate::averages::{compute_averages, Averages};
use crate::view::DemandRow;

/// How far ahead a projection looks, in average periods (months).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Horizon {
    NextMonth,
    NextYear,
}

impl Horizon {
    pub fn periods(self) -> u32 {
        match self {
            Horizon::NextMonth => 1,
            Horizon::NextYear => 12,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Horizon::NextMonth => NEXT_MONTH_LABEL,
            Horizon::NextYear => NEXT_YEAR_LABEL,
        }
    }
}

/// Synthetic row for `horizon`: each average times the period count, rounded.
///
/// Rounds half away from zero (`f64::round`); averages are never negative.
pub fn project(averages: &Averages, horizon: Horizon) -> DemandRow {
    let periods = f64::from(horizon.periods());
    DemandRow {
        id: None,
        date: horizon.label().to_string(),
        faulty_program: round_count(averages.faulty_program * periods),
        meter_complaint: round_count(averages.meter_complaint * periods),
        meter_leak: round_count(averages.meter_leak * periods),
    }
}

pub fn project_next_month(averages: &Averages) -> DemandRow {
    project(averages, Horizon::NextMonth)
}

pub fn project_next_year(averages: &Averages) -> DemandRow {
    project(averages, Horizon::NextYear)
}

// Averages of `u32` counts times 12 stay below 2^53, so the cast is exact.
fn round_count(x: f64) -> u64 {
    x.round() as u64
}

/// Both projections, derived together from one history snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandForecast {
    pub averages: Averages,
    pub next_month: DemandRow,
    pub next_year: DemandRow,
}

impl DemandForecast {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a DemandRecord>,
    {
        Self::from_averages(compute_averages(records))
    }

    pub fn from_history(history: &[Stored<DemandRecord>]) -> Self {
        Self::from_records(history.iter().map(|s| &s.record))
    }

    pub fn from_averages(averages: Averages) -> Self {
        Self {
            next_month: project_next_month(&averages),
            next_year: project_next_year(&averages),
            averages,
        }
    }
}

impl Default for DemandForecast {
    fn default() -> Self {
        Self::from_averages(Averages::default())
    }
}
