//! Delete dataset command
//!
//! Deletion is owner-scoped: a dataset id belonging to another owner is
//! indistinguishable from a nonexistent one, so both report not-found.

use sqlx::SqlitePool;
use uuid::Uuid;

/// Command to delete a stored dataset
#[derive(Debug, Clone)]
pub struct DeleteDatasetCommand {
    pub owner_id: String,
    pub dataset_id: Uuid,
}

/// Response from a successful deletion
#[derive(Debug, Clone, serde::Serialize)]
pub struct DeleteDatasetResponse {
    pub id: Uuid,
    pub deleted: bool,
}

/// Errors that can occur when deleting a dataset
#[derive(Debug, thiserror::Error)]
pub enum DeleteDatasetError {
    #[error("Owner id is required")]
    OwnerRequired,

    #[error("Dataset '{0}' not found")]
    NotFound(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Handler function for deleting datasets
#[tracing::instrument(skip(pool), fields(owner = %command.owner_id, dataset = %command.dataset_id))]
pub async fn handle(
    pool: &SqlitePool,
    command: DeleteDatasetCommand,
) -> Result<DeleteDatasetResponse, DeleteDatasetError> {
    if command.owner_id.trim().is_empty() {
        return Err(DeleteDatasetError::OwnerRequired);
    }

    let result = sqlx::query("DELETE FROM datasets WHERE owner_id = ?1 AND id = ?2")
        .bind(&command.owner_id)
        .bind(command.dataset_id.to_string())
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DeleteDatasetError::NotFound(command.dataset_id));
    }

    tracing::info!(dataset = %command.dataset_id, "Dataset deleted");

    Ok(DeleteDatasetResponse {
        id: command.dataset_id,
        deleted: true,
    })
}
