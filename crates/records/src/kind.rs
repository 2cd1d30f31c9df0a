//! Static schema descriptors: one per record kind.

use serde::Serialize;

/// Horizontal alignment hint for a table column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
}

/// One visible table column.
///
/// `field` is the key the value is stored under in the document; `accessor`
/// is the camelCase name the dashboard uses for the same value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    #[serde(rename = "Header")]
    pub header: &'static str,
    #[serde(skip)]
    pub field: &'static str,
    pub accessor: &'static str,
    pub align: Align,
}

impl Column {
    pub const fn new(header: &'static str, accessor: &'static str, align: Align) -> Self {
        Self {
            header,
            field: header,
            accessor,
            align,
        }
    }
}

/// Everything the generic resource layers need to know about a kind.
#[derive(Debug, PartialEq, Eq)]
pub struct KindDescriptor {
    /// Document store collection name.
    pub collection: &'static str,
    /// HTTP route prefix (leading slash, no trailing slash).
    pub route: &'static str,
    /// Human-readable singular label used in messages ("Demand not found").
    pub label: &'static str,
    /// Response key holding a created record.
    pub key: &'static str,
    /// Response key holding an updated record.
    pub updated_key: &'static str,
    /// Response key holding a deleted record.
    pub deleted_key: &'static str,
    /// Visible columns, in display order.
    pub columns: &'static [Column],
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Meter,
    LabTestResult,
    InventoryLevel,
    Demand,
    MeterWarranty,
    StockMovement,
}

impl RecordKind {
    pub const ALL: [RecordKind; 6] = [
        RecordKind::Meter,
        RecordKind::LabTestResult,
        RecordKind::InventoryLevel,
        RecordKind::Demand,
        RecordKind::MeterWarranty,
        RecordKind::StockMovement,
    ];

    pub fn descriptor(self) -> &'static KindDescriptor {
        match self {
            RecordKind::Meter => &METER,
            RecordKind::LabTestResult => &LAB_TEST_RESULT,
            RecordKind::InventoryLevel => &INVENTORY_LEVEL,
            RecordKind::Demand => &DEMAND,
            RecordKind::MeterWarranty => &METER_WARRANTY,
            RecordKind::StockMovement => &STOCK_MOVEMENT,
        }
    }

    pub fn collection(self) -> &'static str {
        self.descriptor().collection
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }
}

impl core::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.collection())
    }
}

static METER: KindDescriptor = KindDescriptor {
    collection: "meters",
    route: "/meters",
    label: "Meter",
    key: "meter",
    updated_key: "updatedMeter",
    deleted_key: "deletedMeter",
    columns: &[
        Column::new("Region", "location", Align::Left),
        Column::new("Serial Number", "serialNumber", Align::Center),
        Column::new("Meter Type", "meterType", Align::Left),
        Column {
            header: "Installation Date",
            field: "Meter Installation Date",
            accessor: "installationDate",
            align: Align::Center,
        },
    ],
};

static LAB_TEST_RESULT: KindDescriptor = KindDescriptor {
    collection: "labs",
    route: "/lab",
    label: "Lab test result",
    key: "labTestResult",
    updated_key: "updatedLabTestResult",
    deleted_key: "deletedLabTestResult",
    columns: &[
        Column::new("Region", "region", Align::Left),
        Column::new("Serial Number", "serialNumber", Align::Center),
        Column::new("Tested Date", "testedDate", Align::Center),
        Column::new("Result", "result", Align::Center),
    ],
};

static INVENTORY_LEVEL: KindDescriptor = KindDescriptor {
    collection: "inventories",
    route: "/inventory",
    label: "Inventory level",
    key: "inventoryItem",
    updated_key: "updatedInventoryItem",
    deleted_key: "deletedInventoryItem",
    columns: &[
        Column::new("Meter Size", "meterSize", Align::Left),
        Column::new("Minimum Buffer Stock", "minimumBufferStock", Align::Center),
    ],
};

static DEMAND: KindDescriptor = KindDescriptor {
    collection: "demands",
    route: "/demands",
    label: "Demand",
    key: "demand",
    updated_key: "updatedDemand",
    deleted_key: "deletedDemand",
    columns: &[
        Column::new("Date", "date", Align::Left),
        Column::new("Faulty Program", "faultyProgram", Align::Center),
        Column::new("Meter Complaint", "meterComplaint", Align::Center),
        Column::new("Meter Leak", "meterLeak", Align::Center),
    ],
};

static METER_WARRANTY: KindDescriptor = KindDescriptor {
    collection: "meterwarranties",
    route: "/warranties",
    label: "Meter warranty",
    key: "warranty",
    updated_key: "updatedWarranty",
    deleted_key: "deletedWarranty",
    columns: &[
        Column::new("Serial Number", "serialNumber", Align::Left),
        Column::new("Meter Size", "meterSize", Align::Center),
        Column::new("Manufactured Year", "manufacturedYear", Align::Center),
        Column::new("Received Date", "receivedDate", Align::Center),
        Column::new("Physical Checked Date", "physicalCheckedDate", Align::Center),
        Column::new("Defect", "defect", Align::Center),
        Column::new("Status", "status", Align::Center),
    ],
};

static STOCK_MOVEMENT: KindDescriptor = KindDescriptor {
    collection: "movements",
    route: "/movements",
    label: "Movement",
    key: "movement",
    updated_key: "updatedMovement",
    deleted_key: "deletedMovement",
    columns: &[
        Column::new("Transaction From", "transactionFrom", Align::Left),
        Column::new("Transaction To", "transactionTo", Align::Center),
        Column::new("Item Description", "itemDescription", Align::Center),
        Column::new("Quantity", "quantity", Align::Center),
        Column::new("Calendar Month", "calendarMonth", Align::Center),
    ],
};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn collections_and_routes_are_unique() {
        let collections: HashSet<_> = RecordKind::ALL.iter().map(|k| k.collection()).collect();
        let routes: HashSet<_> = RecordKind::ALL.iter().map(|k| k.descriptor().route).collect();
        assert_eq!(collections.len(), RecordKind::ALL.len());
        assert_eq!(routes.len(), RecordKind::ALL.len());
    }

    #[test]
    fn response_keys_follow_the_key_name() {
        for kind in RecordKind::ALL {
            let d = kind.descriptor();
            let mut chars = d.key.chars();
            let first = chars.next().unwrap().to_ascii_uppercase();
            let capitalized: String = std::iter::once(first).chain(chars).collect();
            assert_eq!(d.updated_key, format!("updated{capitalized}"));
            assert_eq!(d.deleted_key, format!("deleted{capitalized}"));
        }
    }

    #[test]
    fn every_kind_has_columns() {
        for kind in RecordKind::ALL {
            assert!(!kind.descriptor().columns.is_empty(), "{kind} has no columns");
        }
    }

    #[test]
    fn columns_serialize_with_display_header() {
        let col = Column::new("Meter Leak", "meterLeak", Align::Center);
        let json = serde_json::to_value(col).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "Header": "Meter Leak", "accessor": "meterLeak", "align": "center" })
        );
    }
}
