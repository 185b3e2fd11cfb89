//! API endpoint URL builders
//!
//! Helper functions to construct API endpoint URLs.

use uuid::Uuid;

/// Build dataset upload URL
pub fn upload_url(base_url: &str) -> String {
    format!("{}/api/v1/datasets/upload", base_url)
}

/// Build dataset list URL
pub fn datasets_url(base_url: &str) -> String {
    format!("{}/api/v1/datasets", base_url)
}

/// Build dataset details URL
pub fn dataset_url(base_url: &str, id: Uuid) -> String {
    format!("{}/api/v1/datasets/{}", base_url, id)
}

/// Build dataset statistics URL
pub fn statistics_url(base_url: &str, id: Uuid) -> String {
    format!("{}/api/v1/datasets/{}/statistics", base_url, id)
}

/// Build health check URL
pub fn health_url(base_url: &str) -> String {
    format!("{}/health", base_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_compose_with_base() {
        let base = "http://localhost:8000";
        let id = Uuid::nil();

        assert_eq!(upload_url(base), "http://localhost:8000/api/v1/datasets/upload");
        assert_eq!(datasets_url(base), "http://localhost:8000/api/v1/datasets");
        assert!(dataset_url(base, id).ends_with(&id.to_string()));
        assert!(statistics_url(base, id).ends_with("/statistics"));
        assert_eq!(health_url(base), "http://localhost:8000/health");
    }
}
