use crate::api::response::{ApiResponse, ErrorResponse};
use crate::auth::Owner;
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::{
    commands::{
        delete::{self as delete_cmd, DeleteDatasetCommand, DeleteDatasetError},
        upload::{self as upload_cmd, UploadDatasetCommand, UploadDatasetError},
    },
    queries::{
        get as get_query, list as list_query, statistics as stats_query, GetDatasetError,
        GetDatasetQuery, GetStatisticsError, GetStatisticsQuery, ListDatasetsError,
        ListDatasetsQuery,
    },
};

pub fn datasets_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", get(list_datasets))
        .route("/upload", post(upload_dataset))
        .route("/:id", get(get_dataset).delete(delete_dataset))
        .route("/:id/statistics", get(dataset_statistics))
}

#[tracing::instrument(skip(pool, owner, multipart), fields(owner = %owner.id()))]
async fn upload_dataset(
    State(pool): State<SqlitePool>,
    owner: Owner,
    mut multipart: Multipart,
) -> Result<Response, DatasetApiError> {
    let mut filename: Option<String> = None;
    let mut content: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| DatasetApiError::Multipart(e.to_string()))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        if field_name == "file" {
            filename = field.file_name().map(|s| s.to_string());
            let data = field
                .bytes()
                .await
                .map_err(|e| DatasetApiError::Multipart(e.to_string()))?;
            content = Some(data.to_vec());
        }
    }

    let content = content.ok_or(DatasetApiError::MissingFile)?;

    let command = UploadDatasetCommand {
        owner_id: owner.0,
        filename,
        content,
    };

    let response = upload_cmd::handle(&pool, command).await?;

    tracing::info!(
        dataset = %response.id,
        records = response.record_count,
        checksum = %response.checksum,
        "Dataset uploaded via API"
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool, owner), fields(owner = %owner.id()))]
async fn list_datasets(
    State(pool): State<SqlitePool>,
    owner: Owner,
) -> Result<Response, DatasetApiError> {
    let query = ListDatasetsQuery { owner_id: owner.0 };
    let response = list_query::handle(&pool, query).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool, owner), fields(owner = %owner.id(), dataset = %id))]
async fn get_dataset(
    State(pool): State<SqlitePool>,
    owner: Owner,
    Path(id): Path<Uuid>,
) -> Result<Response, DatasetApiError> {
    let query = GetDatasetQuery {
        owner_id: owner.0,
        dataset_id: id,
    };
    let response = get_query::handle(&pool, query).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool, owner), fields(owner = %owner.id(), dataset = %id))]
async fn dataset_statistics(
    State(pool): State<SqlitePool>,
    owner: Owner,
    Path(id): Path<Uuid>,
) -> Result<Response, DatasetApiError> {
    let query = GetStatisticsQuery {
        owner_id: owner.0,
        dataset_id: id,
    };
    let response = stats_query::handle(&pool, query).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool, owner), fields(owner = %owner.id(), dataset = %id))]
async fn delete_dataset(
    State(pool): State<SqlitePool>,
    owner: Owner,
    Path(id): Path<Uuid>,
) -> Result<Response, DatasetApiError> {
    let command = DeleteDatasetCommand {
        owner_id: owner.0,
        dataset_id: id,
    };
    let response = delete_cmd::handle(&pool, command).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[derive(Debug)]
enum DatasetApiError {
    /// Multipart body could not be read
    Multipart(String),
    /// No `file` field present in the multipart body
    MissingFile,
    Upload(UploadDatasetError),
    Delete(DeleteDatasetError),
    Get(GetDatasetError),
    List(ListDatasetsError),
    Statistics(GetStatisticsError),
}

impl From<UploadDatasetError> for DatasetApiError {
    fn from(err: UploadDatasetError) -> Self {
        Self::Upload(err)
    }
}

impl From<DeleteDatasetError> for DatasetApiError {
    fn from(err: DeleteDatasetError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetDatasetError> for DatasetApiError {
    fn from(err: GetDatasetError) -> Self {
        Self::Get(err)
    }
}

impl From<ListDatasetsError> for DatasetApiError {
    fn from(err: ListDatasetsError) -> Self {
        Self::List(err)
    }
}

impl From<GetStatisticsError> for DatasetApiError {
    fn from(err: GetStatisticsError) -> Self {
        Self::Statistics(err)
    }
}

impl IntoResponse for DatasetApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            DatasetApiError::Multipart(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                format!("Failed to read multipart body: {}", msg),
            ),
            DatasetApiError::MissingFile => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "No 'file' field found in upload".to_string(),
            ),

            DatasetApiError::Upload(UploadDatasetError::Csv(e)) => {
                (StatusCode::BAD_REQUEST, e.code(), e.to_string())
            },
            DatasetApiError::Upload(UploadDatasetError::OwnerRequired)
            | DatasetApiError::Delete(DeleteDatasetError::OwnerRequired)
            | DatasetApiError::Get(GetDatasetError::OwnerRequired)
            | DatasetApiError::List(ListDatasetsError::OwnerRequired)
            | DatasetApiError::Statistics(GetStatisticsError::OwnerRequired) => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Owner id is required".to_string(),
            ),
            DatasetApiError::Upload(UploadDatasetError::CapacityInvariant { .. }) => {
                tracing::error!("Retention invariant violated during upload: {:?}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            },

            DatasetApiError::Delete(DeleteDatasetError::NotFound(_))
            | DatasetApiError::Get(GetDatasetError::NotFound(_))
            | DatasetApiError::Statistics(GetStatisticsError::NotFound(_)) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Dataset not found".to_string(),
            ),

            DatasetApiError::Upload(UploadDatasetError::Database(_))
            | DatasetApiError::Upload(UploadDatasetError::Serialization(_))
            | DatasetApiError::Delete(DeleteDatasetError::Database(_))
            | DatasetApiError::Get(GetDatasetError::Database(_))
            | DatasetApiError::Get(GetDatasetError::Corrupt(_))
            | DatasetApiError::List(ListDatasetsError::Database(_))
            | DatasetApiError::List(ListDatasetsError::Corrupt(_))
            | DatasetApiError::Statistics(GetStatisticsError::Database(_))
            | DatasetApiError::Statistics(GetStatisticsError::Corrupt(_)) => {
                tracing::error!("Dataset operation failed: {:?}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            },
        };

        let error = ErrorResponse::new(code, message);
        (status, Json(error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equiviz_ingest::CsvError;

    #[test]
    fn test_csv_error_code_flows_into_envelope() {
        let err = DatasetApiError::Upload(UploadDatasetError::Csv(CsvError::Empty));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = DatasetApiError::Get(GetDatasetError::NotFound(Uuid::new_v4()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_capacity_invariant_maps_to_500() {
        let err = DatasetApiError::Upload(UploadDatasetError::CapacityInvariant { count: 6 });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_routes_structure() {
        let router = datasets_routes();
        assert!(format!("{:?}", router).contains("Router"));
    }
}
