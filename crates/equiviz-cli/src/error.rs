//! Error types for the EQUIVIZ CLI
//!
//! All errors are user-facing with clear messages and suggestions.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Comprehensive error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// API server rejected the request
    #[error("Server error: {0}")]
    Api(String),

    /// Required file is missing
    #[error("File not found: '{0}'. Verify the file path exists and you have read permissions.")]
    FileNotFound(String),

    /// Upload rejected before it was sent
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    /// No API token available
    #[error("Authentication error: {0}. Set EQUIVIZ_TOKEN or pass --token.")]
    Auth(String),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("Network request failed: {0}. Check your internet connection and server URL.")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("Failed to parse server response: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl CliError {
    /// Create an API error with context
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_mentions_token() {
        let err = CliError::Auth("no token provided".to_string());
        assert!(err.to_string().contains("EQUIVIZ_TOKEN"));
    }
}
