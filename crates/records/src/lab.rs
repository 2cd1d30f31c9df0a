use serde::{Deserialize, Serialize};

use meterops_core::DomainResult;

use crate::kind::RecordKind;
use crate::record::{require_text, Record};

/// Outcome of a laboratory accuracy test on a meter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabTestResult {
    #[serde(rename = "Serial Number", alias = "serialNumber")]
    pub serial_number: String,
    #[serde(rename = "Region", alias = "region")]
    pub region: String,
    #[serde(rename = "Tested Date", alias = "testedDate")]
    pub tested_date: String,
    #[serde(rename = "Result", alias = "result")]
    pub result: String,
}

impl Record for LabTestResult {
    const KIND: RecordKind = RecordKind::LabTestResult;

    fn validate(&self) -> DomainResult<()> {
        require_text("Serial Number", &self.serial_number)
    }
}
