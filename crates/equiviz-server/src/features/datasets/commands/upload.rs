//! Upload dataset command
//!
//! Validates an uploaded CSV file, computes its statistics, and stores both
//! in a single transaction. The same transaction enforces per-owner
//! retention: once an owner exceeds [`MAX_DATASETS_PER_OWNER`] datasets, the
//! oldest (by upload time, then by insertion sequence) are evicted before
//! commit. SQLite's single-writer transaction model makes the
//! insert-then-evict sequence atomic per owner.

use chrono::{DateTime, Utc};
use equiviz_common::checksum::compute_checksum;
use equiviz_ingest::{stats, validator, CsvError, Statistics};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::features::datasets::MAX_DATASETS_PER_OWNER;

/// Command to upload and store a new dataset
#[derive(Debug, Clone)]
pub struct UploadDatasetCommand {
    /// Owner the dataset is stored under
    pub owner_id: String,

    /// Client-supplied filename; a timestamped name is generated when absent
    pub filename: Option<String>,

    /// Raw upload bytes
    pub content: Vec<u8>,
}

/// Response from a successful upload
#[derive(Debug, Clone, serde::Serialize)]
pub struct UploadDatasetResponse {
    pub id: Uuid,
    pub name: String,
    pub uploaded_at: DateTime<Utc>,
    pub checksum: String,
    pub record_count: i64,
    pub statistics: Statistics,
    /// Ids of datasets evicted by the retention policy, oldest first
    pub evicted: Vec<Uuid>,
}

/// Errors that can occur when uploading a dataset
#[derive(Debug, thiserror::Error)]
pub enum UploadDatasetError {
    #[error("Owner id is required")]
    OwnerRequired,

    #[error(transparent)]
    Csv(#[from] CsvError),

    #[error("Retention invariant violated: owner still holds {count} datasets after eviction")]
    CapacityInvariant { count: i64 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl UploadDatasetCommand {
    /// Validates the command parameters
    pub fn validate(&self) -> Result<(), UploadDatasetError> {
        if self.owner_id.trim().is_empty() {
            return Err(UploadDatasetError::OwnerRequired);
        }
        Ok(())
    }
}

/// Handler function for uploading datasets
///
/// Validation and statistics run before any database work; a file that fails
/// validation never touches the store.
#[tracing::instrument(
    skip(pool, command),
    fields(owner = %command.owner_id, size = command.content.len())
)]
pub async fn handle(
    pool: &SqlitePool,
    command: UploadDatasetCommand,
) -> Result<UploadDatasetResponse, UploadDatasetError> {
    command.validate()?;

    let name = command
        .filename
        .clone()
        .unwrap_or_else(|| format!("upload-{}.csv", Utc::now().format("%Y%m%d-%H%M%S")));

    let records = validator::validate(&name, &command.content)?;
    let statistics = stats::compute(&records);
    let checksum = compute_checksum(&command.content);

    let id = Uuid::new_v4();
    let uploaded_at = Utc::now();
    let data_json = serde_json::to_string(&records)?;
    let distribution_json = serde_json::to_string(&statistics.equipment_distribution)?;

    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO datasets (
            id, owner_id, name, uploaded_at, checksum, data_json,
            total_equipment, avg_flowrate, avg_pressure, avg_temperature,
            equipment_distribution
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
        "#,
    )
    .bind(id.to_string())
    .bind(&command.owner_id)
    .bind(&name)
    .bind(uploaded_at)
    .bind(&checksum)
    .bind(&data_json)
    .bind(statistics.total_equipment)
    .bind(statistics.avg_flowrate)
    .bind(statistics.avg_pressure)
    .bind(statistics.avg_temperature)
    .bind(&distribution_json)
    .execute(&mut *tx)
    .await?;

    let evicted = evict_overflow(&mut tx, &command.owner_id).await?;

    let remaining = count_datasets(&mut tx, &command.owner_id).await?;
    if remaining > MAX_DATASETS_PER_OWNER {
        // Dropping the transaction rolls the whole upload back
        return Err(UploadDatasetError::CapacityInvariant { count: remaining });
    }

    tx.commit().await?;

    if !evicted.is_empty() {
        tracing::info!(
            owner = %command.owner_id,
            evicted = evicted.len(),
            "Retention policy evicted oldest datasets"
        );
    }

    Ok(UploadDatasetResponse {
        id,
        name,
        uploaded_at,
        checksum,
        record_count: statistics.total_equipment,
        statistics,
        evicted,
    })
}

/// Delete the oldest datasets until the owner is back at the retention cap.
///
/// Eviction order is upload time ascending, with the insertion sequence as a
/// tie-break for timestamps that collide under a coarse clock.
async fn evict_overflow(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    owner_id: &str,
) -> Result<Vec<Uuid>, UploadDatasetError> {
    let count = count_datasets(tx, owner_id).await?;
    let overflow = count - MAX_DATASETS_PER_OWNER;
    if overflow <= 0 {
        return Ok(Vec::new());
    }

    let oldest: Vec<(String,)> = sqlx::query_as(
        r#"
        SELECT id FROM datasets
        WHERE owner_id = ?1
        ORDER BY uploaded_at ASC, seq ASC
        LIMIT ?2
        "#,
    )
    .bind(owner_id)
    .bind(overflow)
    .fetch_all(&mut **tx)
    .await?;

    let mut evicted = Vec::with_capacity(oldest.len());
    for (dataset_id,) in oldest {
        sqlx::query("DELETE FROM datasets WHERE id = ?1")
            .bind(&dataset_id)
            .execute(&mut **tx)
            .await?;

        if let Ok(parsed) = Uuid::parse_str(&dataset_id) {
            evicted.push(parsed);
        }
    }

    Ok(evicted)
}

async fn count_datasets(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    owner_id: &str,
) -> Result<i64, UploadDatasetError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM datasets WHERE owner_id = ?1")
        .bind(owner_id)
        .fetch_one(&mut **tx)
        .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv_body(rows: &[&str]) -> Vec<u8> {
        let mut out = String::from("Equipment_Name,Type,Flowrate,Pressure,Temperature");
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out.push('\n');
        out.into_bytes()
    }

    fn upload_command(owner: &str, filename: &str, rows: &[&str]) -> UploadDatasetCommand {
        UploadDatasetCommand {
            owner_id: owner.to_string(),
            filename: Some(filename.to_string()),
            content: csv_body(rows),
        }
    }

    #[test]
    fn test_empty_owner_rejected() {
        let command = UploadDatasetCommand {
            owner_id: "  ".to_string(),
            filename: Some("plant.csv".to_string()),
            content: Vec::new(),
        };
        assert!(matches!(
            command.validate(),
            Err(UploadDatasetError::OwnerRequired)
        ));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_upload_stores_dataset_with_statistics(pool: SqlitePool) {
        let command = upload_command(
            "alice",
            "plant.csv",
            &["Pump-101,Pump,150.5,25.3,75.2", "Valve-201,Valve,200.0,30.5,80.1"],
        );

        let response = handle(&pool, command).await.unwrap();

        assert_eq!(response.record_count, 2);
        assert_eq!(response.statistics.avg_flowrate, Some(175.25));
        assert!(response.evicted.is_empty());

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM datasets WHERE owner_id = 'alice'")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_invalid_csv_stores_nothing(pool: SqlitePool) {
        let command = upload_command("alice", "plant.csv", &["Pump-101,Pump,oops,25.3,75.2"]);

        let result = handle(&pool, command).await;
        assert!(matches!(result, Err(UploadDatasetError::Csv(_))));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM datasets")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_sixth_upload_evicts_oldest(pool: SqlitePool) {
        for i in 1..=5 {
            let command =
                upload_command("alice", &format!("set-{}.csv", i), &["Pump-101,Pump,1,2,3"]);
            let response = handle(&pool, command).await.unwrap();
            assert!(response.evicted.is_empty());
        }

        let oldest_id: String =
            sqlx::query_scalar("SELECT id FROM datasets ORDER BY uploaded_at ASC, seq ASC LIMIT 1")
                .fetch_one(&pool)
                .await
                .unwrap();

        let sixth = upload_command("alice", "set-6.csv", &["Pump-101,Pump,1,2,3"]);
        let response = handle(&pool, sixth).await.unwrap();

        assert_eq!(response.evicted.len(), 1);
        assert_eq!(response.evicted[0].to_string(), oldest_id);

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM datasets WHERE owner_id = 'alice'")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, MAX_DATASETS_PER_OWNER);

        let names: Vec<(String,)> = sqlx::query_as("SELECT name FROM datasets WHERE owner_id = 'alice'")
            .fetch_all(&pool)
            .await
            .unwrap();
        assert!(!names.iter().any(|(n,)| n == "set-1.csv"));
        assert!(names.iter().any(|(n,)| n == "set-6.csv"));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_concurrent_uploads_hold_retention_cap(pool: SqlitePool) {
        for i in 1..=5 {
            let command =
                upload_command("alice", &format!("seed-{}.csv", i), &["Pump-101,Pump,1,2,3"]);
            handle(&pool, command).await.unwrap();
        }

        // Race four uploads for the same owner against the full store; every
        // one must land inside its own insert+evict transaction.
        let mut tasks = Vec::new();
        for i in 1..=4 {
            let pool = pool.clone();
            let command =
                upload_command("alice", &format!("race-{}.csv", i), &["Pump-101,Pump,1,2,3"]);
            tasks.push(tokio::spawn(async move { handle(&pool, command).await }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM datasets WHERE owner_id = 'alice'")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, MAX_DATASETS_PER_OWNER);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_retention_is_per_owner(pool: SqlitePool) {
        for i in 1..=5 {
            let command =
                upload_command("alice", &format!("a-{}.csv", i), &["Pump-101,Pump,1,2,3"]);
            handle(&pool, command).await.unwrap();
        }

        let command = upload_command("bob", "b-1.csv", &["Valve-201,Valve,1,2,3"]);
        let response = handle(&pool, command).await.unwrap();
        assert!(response.evicted.is_empty());

        let alice_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM datasets WHERE owner_id = 'alice'")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(alice_count, 5);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_checksum_matches_content(pool: SqlitePool) {
        let content = csv_body(&["Pump-101,Pump,1,2,3"]);
        let expected = compute_checksum(&content);

        let command = UploadDatasetCommand {
            owner_id: "alice".to_string(),
            filename: Some("plant.csv".to_string()),
            content,
        };

        let response = handle(&pool, command).await.unwrap();
        assert_eq!(response.checksum, expected);
    }
}
