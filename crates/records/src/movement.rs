use serde::{Deserialize, Serialize};

use crate::kind::RecordKind;
use crate::lenient;
use crate::record::Record;

/// Meters moved between two stores in a given month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMovement {
    #[serde(rename = "Transaction From", alias = "transactionFrom")]
    pub transaction_from: String,
    #[serde(rename = "Transaction To", alias = "transactionTo")]
    pub transaction_to: String,
    #[serde(rename = "Item Description", alias = "itemDescription")]
    pub item_description: String,
    #[serde(rename = "Quantity", alias = "quantity", deserialize_with = "lenient::number")]
    pub quantity: u32,
    #[serde(rename = "Calendar Month", alias = "calendarMonth")]
    pub calendar_month: String,
}

impl Record for StockMovement {
    const KIND: RecordKind = RecordKind::StockMovement;
}
