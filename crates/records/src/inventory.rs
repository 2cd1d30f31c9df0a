use serde::{Deserialize, Serialize};

use meterops_core::DomainResult;

use crate::kind::RecordKind;
use crate::lenient;
use crate::record::{require_text, Record};

/// Minimum buffer stock to keep on hand for one meter size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLevel {
    /// Size label, e.g. `"15mm"`.
    #[serde(rename = "Meter Size", alias = "meterSize")]
    pub meter_size: String,
    #[serde(
        rename = "Minimum Buffer Stock",
        alias = "minimumBufferStock",
        deserialize_with = "lenient::number"
    )]
    pub minimum_buffer_stock: u32,
}

impl Record for InventoryLevel {
    const KIND: RecordKind = RecordKind::InventoryLevel;

    fn validate(&self) -> DomainResult<()> {
        require_text("Meter Size", &self.meter_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_meter_size_is_invalid() {
        let level = InventoryLevel {
            meter_size: String::new(),
            minimum_buffer_stock: 10,
        };
        assert!(level.validate().is_err());
    }
}
