use serde::{Deserialize, Serialize};

use meterops_core::DomainResult;

use crate::kind::RecordKind;
use crate::lenient;
use crate::record::{require_text, Record};

/// An installed water meter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meter {
    #[serde(rename = "Region", alias = "region", alias = "location")]
    pub region: String,
    #[serde(rename = "Serial Number", alias = "serialNumber")]
    pub serial_number: String,
    /// Nominal size in millimetres.
    #[serde(rename = "Meter Size", alias = "meterSize", deserialize_with = "lenient::number")]
    pub meter_size: u32,
    #[serde(rename = "Meter Type", alias = "meterType")]
    pub meter_type: String,
    #[serde(
        rename = "Meter Manufacturer",
        alias = "Meter Manufacture",
        alias = "meterManufacturer"
    )]
    pub manufacturer: String,
    #[serde(rename = "Meter Model", alias = "meterModel")]
    pub model: String,
    #[serde(
        rename = "Meter Installation Date",
        alias = "installationDate",
        alias = "meterInstallationDate"
    )]
    pub installation_date: String,
    /// Age in years.
    #[serde(rename = "Meter Age", alias = "meterAge", deserialize_with = "lenient::number")]
    pub age: u32,
}

impl Record for Meter {
    const KIND: RecordKind = RecordKind::Meter;

    fn validate(&self) -> DomainResult<()> {
        require_text("Serial Number", &self.serial_number)
    }
}
