//! HTTP API client for the EQUIVIZ server
//!
//! Provides methods to interact with the dataset backend API.

use crate::api::{endpoints, types::*};
use crate::error::{CliError, Result};
use reqwest::{multipart, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use uuid::Uuid;

// ============================================================================
// API Client Constants
// ============================================================================

/// Default timeout for API requests in seconds.
/// Can be overridden via EQUIVIZ_API_TIMEOUT_SECS environment variable.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 60;

/// Default server URL when neither --server-url nor EQUIVIZ_SERVER_URL is set.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// API client for the EQUIVIZ server
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: String, token: Option<String>) -> Result<Self> {
        let timeout_secs = std::env::var("EQUIVIZ_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_API_TIMEOUT_SECS);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    fn token(&self) -> Result<&str> {
        self.token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| CliError::Auth("no API token provided".to_string()))
    }

    /// Check server health
    pub async fn health_check(&self) -> Result<bool> {
        let url = endpoints::health_url(&self.base_url);

        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    /// Upload a CSV file as a new dataset
    pub async fn upload(&self, filename: &str, content: Vec<u8>) -> Result<UploadResponse> {
        let url = endpoints::upload_url(&self.base_url);

        let part = multipart::Part::bytes(content)
            .file_name(filename.to_string())
            .mime_str("text/csv")?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.token()?)
            .multipart(form)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// List stored datasets, newest first
    pub async fn list(&self) -> Result<ListResponse> {
        let url = endpoints::datasets_url(&self.base_url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(self.token()?)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Get one dataset with its full record payload
    pub async fn get(&self, id: Uuid) -> Result<DatasetDetail> {
        let url = endpoints::dataset_url(&self.base_url, id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(self.token()?)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Get one dataset's statistics
    pub async fn statistics(&self, id: Uuid) -> Result<equiviz_ingest::Statistics> {
        let url = endpoints::statistics_url(&self.base_url, id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(self.token()?)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Delete a dataset
    pub async fn delete(&self, id: Uuid) -> Result<DeleteResponse> {
        let url = endpoints::dataset_url(&self.base_url, id);

        let response = self
            .client
            .delete(&url)
            .bearer_auth(self.token()?)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Unwrap the server envelope, turning error envelopes into [`CliError::Api`].
    async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            // Prefer the server's structured error message when present
            if let Ok(envelope) = serde_json::from_slice::<ApiErrorResponse>(&body) {
                return Err(CliError::api(format!(
                    "{} ({})",
                    envelope.error.message, envelope.error.code
                )));
            }
            if status == StatusCode::UNAUTHORIZED {
                return Err(CliError::Auth("server rejected the API token".to_string()));
            }
            return Err(CliError::api(format!("unexpected status {}", status)));
        }

        let envelope: ApiResponse<T> = serde_json::from_slice(&body)?;
        Ok(envelope.data)
    }
}
