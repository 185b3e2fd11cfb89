//! List datasets query
//!
//! Returns the owner's datasets newest first. The retention policy caps the
//! store at the per-owner maximum and the query limits to the same bound, so
//! no pagination is needed; the record payload is left unparsed for the list
//! view.

use sqlx::SqlitePool;

use crate::features::datasets::types::{DatasetRow, DatasetSummary, StoredDatasetError};
use crate::features::datasets::MAX_DATASETS_PER_OWNER;

/// Query for an owner's datasets
#[derive(Debug, Clone)]
pub struct ListDatasetsQuery {
    pub owner_id: String,
}

/// Response listing an owner's datasets, newest first
#[derive(Debug, Clone, serde::Serialize)]
pub struct ListDatasetsResponse {
    pub datasets: Vec<DatasetSummary>,
    pub total: i64,
}

/// Errors that can occur when listing datasets
#[derive(Debug, thiserror::Error)]
pub enum ListDatasetsError {
    #[error("Owner id is required")]
    OwnerRequired,

    #[error("Stored dataset is corrupted: {0}")]
    Corrupt(#[from] StoredDatasetError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Handler function for listing datasets
#[tracing::instrument(skip(pool), fields(owner = %query.owner_id))]
pub async fn handle(
    pool: &SqlitePool,
    query: ListDatasetsQuery,
) -> Result<ListDatasetsResponse, ListDatasetsError> {
    if query.owner_id.trim().is_empty() {
        return Err(ListDatasetsError::OwnerRequired);
    }

    let rows: Vec<DatasetRow> = sqlx::query_as(
        r#"
        SELECT id, name, uploaded_at, checksum, data_json, total_equipment,
               avg_flowrate, avg_pressure, avg_temperature, equipment_distribution
        FROM datasets
        WHERE owner_id = ?1
        ORDER BY uploaded_at DESC, seq DESC
        LIMIT ?2
        "#,
    )
    .bind(&query.owner_id)
    .bind(MAX_DATASETS_PER_OWNER)
    .fetch_all(pool)
    .await?;

    let datasets = rows
        .into_iter()
        .map(DatasetRow::into_summary)
        .collect::<Result<Vec<_>, _>>()?;

    let total = datasets.len() as i64;

    Ok(ListDatasetsResponse { datasets, total })
}
