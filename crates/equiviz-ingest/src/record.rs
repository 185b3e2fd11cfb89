//! Domain types for validated equipment data

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One validated equipment reading.
///
/// Serialized field names match the CSV column headers so stored JSON stays
/// bit-compatible with the upload format clients already produce.
/// Immutable once validated; the validator guarantees non-empty strings and
/// finite numerics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Equipment_Name")]
    pub name: String,

    #[serde(rename = "Type")]
    pub equipment_type: String,

    #[serde(rename = "Flowrate")]
    pub flowrate: f64,

    #[serde(rename = "Pressure")]
    pub pressure: f64,

    #[serde(rename = "Temperature")]
    pub temperature: f64,
}

/// Derived, read-only summary of a record set.
///
/// Computed once at upload time and persisted alongside the records; never
/// recomputed on read. The `avg_*` fields are `None` only for an empty
/// record set, which the validator rules out but the type still expresses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_equipment: i64,
    pub avg_flowrate: Option<f64>,
    pub avg_pressure: Option<f64>,
    pub avg_temperature: Option<f64>,
    /// Record count per equipment type, case-sensitive exact match.
    /// BTreeMap keeps serialization deterministic; key order carries no
    /// meaning.
    pub equipment_distribution: BTreeMap<String, i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_csv_column_names() {
        let record = Record {
            name: "Pump-101".to_string(),
            equipment_type: "Pump".to_string(),
            flowrate: 150.5,
            pressure: 25.3,
            temperature: 75.2,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Equipment_Name"], "Pump-101");
        assert_eq!(json["Type"], "Pump");
        assert_eq!(json["Flowrate"], 150.5);
    }

    #[test]
    fn test_statistics_null_averages_serialize_as_null() {
        let stats = Statistics {
            total_equipment: 0,
            avg_flowrate: None,
            avg_pressure: None,
            avg_temperature: None,
            equipment_distribution: BTreeMap::new(),
        };

        let json = serde_json::to_value(&stats).unwrap();
        assert!(json["avg_flowrate"].is_null());
    }
}
