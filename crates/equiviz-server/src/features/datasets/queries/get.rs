//! Get dataset query
//!
//! Fetches one dataset with its full record payload in upload order.

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::features::datasets::types::{DatasetDetail, DatasetRow, StoredDatasetError};

/// Query for a single dataset
#[derive(Debug, Clone)]
pub struct GetDatasetQuery {
    pub owner_id: String,
    pub dataset_id: Uuid,
}

/// Errors that can occur when fetching a dataset
#[derive(Debug, thiserror::Error)]
pub enum GetDatasetError {
    #[error("Owner id is required")]
    OwnerRequired,

    #[error("Dataset '{0}' not found")]
    NotFound(Uuid),

    #[error("Stored dataset is corrupted: {0}")]
    Corrupt(#[from] StoredDatasetError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Handler function for fetching a dataset
#[tracing::instrument(skip(pool), fields(owner = %query.owner_id, dataset = %query.dataset_id))]
pub async fn handle(
    pool: &SqlitePool,
    query: GetDatasetQuery,
) -> Result<DatasetDetail, GetDatasetError> {
    if query.owner_id.trim().is_empty() {
        return Err(GetDatasetError::OwnerRequired);
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

    let row = row.ok_or(GetDatasetError::NotFound(query.dataset_id))?;

    Ok(row.into_detail()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::datasets::commands::upload::{self, UploadDatasetCommand};

    async fn upload_two_rows(pool: &SqlitePool, owner: &str) -> Uuid {
        let command = UploadDatasetCommand {
            owner_id: owner.to_string(),
            filename: Some("plant.csv".to_string()),
            content: b"Equipment_Name,Type,Flowrate,Pressure,Temperature\n\
                       Pump-101,Pump,150.5,25.3,75.2\n\
                       Valve-201,Valve,200.0,30.5,80.1\n"
                .to_vec(),
        };
        upload::handle(pool, command).await.unwrap().id
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_get_returns_records_in_upload_order(pool: SqlitePool) {
        let id = upload_two_rows(&pool, "alice").await;

        let detail = handle(
            &pool,
            GetDatasetQuery { owner_id: "alice".to_string(), dataset_id: id },
        )
        .await
        .unwrap();

        assert_eq!(detail.id, id);
        assert_eq!(detail.records.len(), 2);
        assert_eq!(detail.records[0].name, "Pump-101");
        assert_eq!(detail.records[1].name, "Valve-201");
        assert_eq!(detail.statistics.avg_flowrate, Some(175.25));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_get_unknown_id_is_not_found(pool: SqlitePool) {
        let result = handle(
            &pool,
            GetDatasetQuery {
                owner_id: "alice".to_string(),
                dataset_id: Uuid::new_v4(),
            },
        )
        .await;

        assert!(matches!(result, Err(GetDatasetError::NotFound(_))));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_get_is_owner_scoped(pool: SqlitePool) {
        let id = upload_two_rows(&pool, "alice").await;

        let result = handle(
            &pool,
            GetDatasetQuery { owner_id: "bob".to_string(), dataset_id: id },
        )
        .await;

        assert!(matches!(result, Err(GetDatasetError::NotFound(_))));
    }
}
