//! Shared row and response types for the dataset feature

use chrono::{DateTime, Utc};
use equiviz_ingest::{Record, Statistics};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Columns fetched for a stored dataset.
///
/// `data_json` and `equipment_distribution` hold serialized JSON exactly as
/// written at upload time; statistics are read back, never recomputed.
#[derive(Debug, FromRow)]
pub struct DatasetRow {
    pub id: String,
    pub name: String,
    pub uploaded_at: DateTime<Utc>,
    pub checksum: String,
    pub data_json: String,
    pub total_equipment: i64,
    pub avg_flowrate: Option<f64>,
    pub avg_pressure: Option<f64>,
    pub avg_temperature: Option<f64>,
    pub equipment_distribution: String,
}

/// A stored row failed to decode back into domain types.
///
/// This indicates stored data corruption, not a client error.
#[derive(Debug, thiserror::Error)]
pub enum StoredDatasetError {
    #[error("Stored dataset id is not a valid UUID: {0}")]
    Id(#[from] uuid::Error),

    #[error("Stored dataset payload does not deserialize: {0}")]
    Json(#[from] serde_json::Error),
}

/// Dataset metadata and statistics, without the record payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub id: Uuid,
    pub name: String,
    pub uploaded_at: DateTime<Utc>,
    pub checksum: String,
    pub record_count: i64,
    pub statistics: Statistics,
}

/// Full dataset view including the validated records in upload order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetDetail {
    pub id: Uuid,
    pub name: String,
    pub uploaded_at: DateTime<Utc>,
    pub checksum: String,
    pub records: Vec<Record>,
    pub statistics: Statistics,
}

impl DatasetRow {
    /// Rebuild the statistics snapshot from the stored columns.
    pub fn statistics(&self) -> Result<Statistics, StoredDatasetError> {
        let equipment_distribution: BTreeMap<String, i64> =
            serde_json::from_str(&self.equipment_distribution)?;

        Ok(Statistics {
            total_equipment: self.total_equipment,
            avg_flowrate: self.avg_flowrate,
            avg_pressure: self.avg_pressure,
            avg_temperature: self.avg_temperature,
            equipment_distribution,
        })
    }

    /// Convert into the list view, leaving `data_json` unparsed.
    pub fn into_summary(self) -> Result<DatasetSummary, StoredDatasetError> {
        let statistics = self.statistics()?;

        Ok(DatasetSummary {
            id: Uuid::parse_str(&self.id)?,
            name: self.name,
            uploaded_at: self.uploaded_at,
            checksum: self.checksum,
            record_count: statistics.total_equipment,
            statistics,
        })
    }

    /// Convert into the detail view, deserializing the record payload.
    pub fn into_detail(self) -> Result<DatasetDetail, StoredDatasetError> {
        let statistics = self.statistics()?;
        let records: Vec<Record> = serde_json::from_str(&self.data_json)?;

        Ok(DatasetDetail {
            id: Uuid::parse_str(&self.id)?,
            name: self.name,
            uploaded_at: self.uploaded_at,
            checksum: self.checksum,
            records,
            statistics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> DatasetRow {
        DatasetRow {
            id: Uuid::new_v4().to_string(),
            name: "plant.csv".to_string(),
            uploaded_at: Utc::now(),
            checksum: "abc".to_string(),
            data_json: r#"[{"Equipment_Name":"Pump-101","Type":"Pump","Flowrate":150.5,"Pressure":25.3,"Temperature":75.2}]"#.to_string(),
            total_equipment: 1,
            avg_flowrate: Some(150.5),
            avg_pressure: Some(25.3),
            avg_temperature: Some(75.2),
            equipment_distribution: r#"{"Pump":1}"#.to_string(),
        }
    }

    #[test]
    fn test_row_converts_to_detail() {
        let detail = sample_row().into_detail().unwrap();
        assert_eq!(detail.records.len(), 1);
        assert_eq!(detail.records[0].name, "Pump-101");
        assert_eq!(detail.statistics.total_equipment, 1);
        assert_eq!(detail.statistics.equipment_distribution.get("Pump"), Some(&1));
    }

    #[test]
    fn test_summary_record_count_matches_statistics() {
        let summary = sample_row().into_summary().unwrap();
        assert_eq!(summary.record_count, summary.statistics.total_equipment);
    }

    #[test]
    fn test_corrupt_payload_is_an_error() {
        let mut row = sample_row();
        row.data_json = "not json".to_string();
        assert!(matches!(
            row.into_detail(),
            Err(StoredDatasetError::Json(_))
        ));
    }

    #[test]
    fn test_invalid_stored_id_is_an_error() {
        let mut row = sample_row();
        row.id = "not-a-uuid".to_string();
        assert!(matches!(row.into_summary(), Err(StoredDatasetError::Id(_))));
    }
}
