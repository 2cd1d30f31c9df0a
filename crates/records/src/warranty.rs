use serde::{Deserialize, Serialize};

use meterops_core::DomainResult;

use crate::kind::RecordKind;
use crate::lenient;
use crate::record::{require_text, Record};

/// A warranty claim raised against a returned meter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterWarranty {
    #[serde(rename = "Serial Number", alias = "serialNumber")]
    pub serial_number: String,
    #[serde(rename = "Meter Size", alias = "meterSize", deserialize_with = "lenient::number")]
    pub meter_size: u32,
    #[serde(
        rename = "Manufactured Year",
        alias = "manufacturedYear",
        deserialize_with = "lenient::number"
    )]
    pub manufactured_year: i32,
    #[serde(rename = "Received Date", alias = "receivedDate")]
    pub received_date: String,
    #[serde(rename = "Physical Checked Date", alias = "physicalCheckedDate")]
    pub physical_checked_date: String,
    #[serde(rename = "Defect", alias = "defect")]
    pub defect: String,
    #[serde(rename = "Status", alias = "status")]
    pub status: String,
}

impl Record for MeterWarranty {
    const KIND: RecordKind = RecordKind::MeterWarranty;

    fn validate(&self) -> DomainResult<()> {
        require_text("Serial Number", &self.serial_number)
    }
}
