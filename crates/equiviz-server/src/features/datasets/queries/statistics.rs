//! Dataset statistics query
//!
//! Reads back the statistics snapshot persisted at upload time; nothing is
//! recomputed from the record payload.

use equiviz_ingest::Statistics;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::features::datasets::types::{DatasetRow, StoredDatasetError};

/// Query for one dataset's statistics
#[derive(Debug, Clone)]
pub struct GetStatisticsQuery {
    pub owner_id: String,
    pub dataset_id: Uuid,
}

/// Errors that can occur when fetching statistics
#[derive(Debug, thiserror::Error)]
pub enum GetStatisticsError {
    #[error("Owner id is required")]
    OwnerRequired,

    #[error("Dataset '{0}' not found")]
    NotFound(Uuid),

    #[error("Stored dataset is corrupted: {0}")]
    Corrupt(#[from] StoredDatasetError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Handler function for fetching dataset statistics
#[tracing::instrument(skip(pool), fields(owner = %query.owner_id, dataset = %query.dataset_id))]
pub async fn handle(
    pool: &SqlitePool,
    query: GetStatisticsQuery,
) -> Result<Statistics, GetStatisticsError> {
    if query.owner_id.trim().is_empty() {
        return Err(GetStatisticsError::OwnerRequired);
    }

    let row: Option<DatasetRow> = sqlx::query_as(
        r#"
        SELECT id, name, uploaded_at, checksum, data_json, total_equipment,
               avg_flowrate, avg_pressure, avg_temperature, equipment_distribution
        FROM datasets
        WHERE owner_id = ?1 AND id = ?2
        "#,
    )
    .bind(&query.owner_id)
    .bind(query.dataset_id.to_string())
    .fetch_optional(pool)
    .await?;

    let row = row.ok_or(GetStatisticsError::NotFound(query.dataset_id))?;

    Ok(row.statistics()?)
}
