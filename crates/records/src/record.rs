use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use meterops_core::{DomainResult, RecordId};

use crate::kind::{KindDescriptor, RecordKind};

/// A flat record shape stored in its own collection.
///
/// Implementors serialize under their stored field names (`"Serial Number"`,
/// `"Faulty Program"`, ...). The identifier is not part of the record; it
/// lives on [`Stored`].
pub trait Record:
    Clone + core::fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const KIND: RecordKind;

    /// Check field-level rules before the record is written.
    fn validate(&self) -> DomainResult<()> {
        Ok(())
    }

    fn descriptor() -> &'static KindDescriptor {
        Self::KIND.descriptor()
    }
}

/// A persisted record: the store-assigned id plus bookkeeping timestamps.
///
/// Serializes flat, e.g. `{ "_id": "...", "Date": "Jan", ..., "createdAt": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<R> {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(flatten)]
    pub record: R,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

pub(crate) fn require_text(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(meterops_core::DomainError::validation(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::demand::DemandRecord;

    fn stored() -> Stored<DemandRecord> {
        let at = Utc.with_ymd_and_hms(2024, 1, 31, 8, 0, 0).unwrap();
        Stored {
            id: RecordId::new(),
            record: DemandRecord::new("Jan 2024", 2, 4, 0),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn stored_record_serializes_flat() {
        let s = stored();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["_id"], s.id.to_string());
        assert_eq!(json["Date"], "Jan 2024");
        assert_eq!(json["Faulty Program"], 2);
        assert!(json.get("record").is_none());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn stored_record_reads_back_from_api_shape() {
        let s = stored();
        let json = serde_json::to_value(&s).unwrap();
        let back: Stored<DemandRecord> = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
    }
}
