use serde::{Deserialize, Serialize};

use meterops_core::{DomainError, DomainResult};

use crate::kind::RecordKind;
use crate::lenient;
use crate::record::{require_text, Record};

/// Date label of the synthetic next-month forecast row.
pub const NEXT_MONTH_LABEL: &str = "Next Month (Forecast)";

/// Date label of the synthetic next-year forecast row.
pub const NEXT_YEAR_LABEL: &str = "Next Year (Forecast)";

/// True if `label` is one of the forecast sentinel labels (exact match).
pub fn is_forecast_label(label: &str) -> bool {
    label == NEXT_MONTH_LABEL || label == NEXT_YEAR_LABEL
}

/// Monthly incident counts for meters.
///
/// `date` is a free-form period label ("Jan 2024", "2024-01"); it is never
/// parsed as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandRecord {
    #[serde(rename = "Date", alias = "date")]
    pub date: String,
    #[serde(rename = "Faulty Program", alias = "faultyProgram", deserialize_with = "lenient::number")]
    pub faulty_program: u32,
    #[serde(rename = "Meter Complaint", alias = "meterComplaint", deserialize_with = "lenient::number")]
    pub meter_complaint: u32,
    #[serde(rename = "Meter Leak", alias = "meterLeak", deserialize_with = "lenient::number")]
    pub meter_leak: u32,
}

impl DemandRecord {
    pub fn new(date: impl Into<String>, faulty_program: u32, meter_complaint: u32, meter_leak: u32) -> Self {
        Self {
            date: date.into(),
            faulty_program,
            meter_complaint,
            meter_leak,
        }
    }
}

impl Record for DemandRecord {
    const KIND: RecordKind = RecordKind::Demand;

    fn validate(&self) -> DomainResult<()> {
        require_text("Date", &self.date)?;
        // A stored row carrying a sentinel label would lose its edit/delete actions.
        // Trimmed, so padded labels are rejected too.
        if is_forecast_label(self.date.trim()) {
            return Err(DomainError::validation(format!(
                "Date {:?} is reserved for forecast rows",
                self.date
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_stored_field_names() {
        let r: DemandRecord = serde_json::from_value(serde_json::json!({
            "Date": "Jan 2024",
            "Faulty Program": 2,
            "Meter Complaint": 4,
            "Meter Leak": 0,
        }))
        .unwrap();
        assert_eq!(r, DemandRecord::new("Jan 2024", 2, 4, 0));
    }

    #[test]
    fn reads_dashboard_accessor_names() {
        let r: DemandRecord = serde_json::from_value(serde_json::json!({
            "date": "Feb 2024",
            "faultyProgram": "4",
            "meterComplaint": 0,
            "meterLeak": "2",
        }))
        .unwrap();
        assert_eq!(r, DemandRecord::new("Feb 2024", 4, 0, 2));
    }

    #[test]
    fn writes_stored_field_names() {
        let json = serde_json::to_value(DemandRecord::new("Mar", 1, 2, 3)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "Date": "Mar", "Faulty Program": 1, "Meter Complaint": 2, "Meter Leak": 3 })
        );
    }

    #[test]
    fn negative_counts_do_not_deserialize() {
        let res = serde_json::from_value::<DemandRecord>(serde_json::json!({
            "Date": "Jan", "Faulty Program": -1, "Meter Complaint": 0, "Meter Leak": 0,
        }));
        assert!(res.is_err());
    }

    #[test]
    fn sentinel_and_blank_dates_are_rejected() {
        assert!(DemandRecord::new(NEXT_MONTH_LABEL, 0, 0, 0).validate().is_err());
        assert!(DemandRecord::new(NEXT_YEAR_LABEL, 0, 0, 0).validate().is_err());
        assert!(DemandRecord::new("  ", 0, 0, 0).validate().is_err());
        assert!(DemandRecord::new(" Next Year (Forecast) ", 0, 0, 0).validate().is_err());
        assert!(DemandRecord::new("Apr 2024", 0, 0, 0).validate().is_ok());
    }

    #[test]
    fn forecast_label_match_is_exact() {
        assert!(is_forecast_label("Next Month (Forecast)"));
        assert!(is_forecast_label("Next Year (Forecast)"));
        assert!(!is_forecast_label("next month (forecast)"));
        assert!(!is_forecast_label("Next Month"));
    }
}
