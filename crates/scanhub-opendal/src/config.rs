//! Storage backend configuration.

use serde::{Deserialize, Serialize};

use crate::error::{StorageError, StorageResult};

/// S3-compatible storage configuration.
///
/// Credentials and the endpoint are optional so the backend can fall back
/// to ambient credentials (instance profiles, environment) when deployed
/// against real S3, while local setups point at a MinIO endpoint.
#[derive(Clone, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct StorageConfig {
    /// Bucket holding report objects.
    pub bucket: String,
    /// AWS region (optional for S3-compatible stores).
    pub region: Option<String>,
    /// Custom endpoint URL for S3-compatible stores.
    pub endpoint: Option<String>,
    /// Access key id.
    pub access_key_id: Option<String>,
    /// Secret access key.
    pub secret_access_key: Option<String>,
}

impl StorageConfig {
    /// Creates a new configuration for the given bucket.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            region: None,
            endpoint: None,
            access_key_id: None,
            secret_access_key: None,
        }
    }

    /// Sets the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets a custom endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets static credentials.
    pub fn with_credentials(
        mut self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> StorageResult<()> {
        if self.bucket.is_empty() {
            return Err(StorageError::init("bucket cannot be empty"));
        }

        if let Some(endpoint) = self.endpoint.as_deref()
            && !endpoint.starts_with("http://")
            && !endpoint.starts_with("https://")
        {
            return Err(StorageError::init(
                "endpoint must start with 'http://' or 'https://'",
            ));
        }

        Ok(())
    }
}

impl std::fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageConfig")
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("access_key_id", &self.access_key_id.as_ref().map(|_| "***"))
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| "***"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_endpoint_and_credentials() {
        let config = StorageConfig::new("scanhub-reports")
            .with_region("us-east-1")
            .with_endpoint("http://localhost:9000")
            .with_credentials("minioadmin", "minioadmin");

        assert_eq!(config.bucket, "scanhub-reports");
        assert_eq!(config.region.as_deref(), Some("us-east-1"));
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:9000"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_empty_bucket() {
        let config = StorageConfig::new("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_invalid_endpoint_scheme() {
        let config = StorageConfig::new("scanhub-reports").with_endpoint("localhost:9000");
        assert!(config.validate().is_err());
    }

    #[test]
    fn debug_masks_credentials() {
        let config = StorageConfig::new("scanhub-reports")
            .with_credentials("AKIAEXAMPLE", "super-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(!rendered.contains("AKIAEXAMPLE"));
    }
}
