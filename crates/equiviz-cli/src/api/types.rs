//! Response types mirrored from the server API

use chrono::{DateTime, Utc};
use equiviz_ingest::{Record, Statistics};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Success envelope returned by every endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

/// Error envelope returned on failure
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: ApiErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
}

/// Response from a successful upload
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub id: Uuid,
    pub name: String,
    pub uploaded_at: DateTime<Utc>,
    pub checksum: String,
    pub record_count: i64,
    pub statistics: Statistics,
    /// Ids of datasets evicted by the retention policy
    #[serde(default)]
    pub evicted: Vec<Uuid>,
}

/// Dataset metadata and statistics, without the record payload
#[derive(Debug, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub id: Uuid,
    pub name: String,
    pub uploaded_at: DateTime<Utc>,
    pub checksum: String,
    pub record_count: i64,
    pub statistics: Statistics,
}

/// Full dataset view including records in upload order
#[derive(Debug, Serialize, Deserialize)]
pub struct DatasetDetail {
    pub id: Uuid,
    pub name: String,
    pub uploaded_at: DateTime<Utc>,
    pub checksum: String,
    pub records: Vec<Record>,
    pub statistics: Statistics,
}

/// Response listing an owner's datasets
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse {
    pub datasets: Vec<DatasetSummary>,
    pub total: i64,
}

/// Response from a successful deletion
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub id: Uuid,
    pub deleted: bool,
}
