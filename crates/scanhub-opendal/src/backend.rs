//! Storage backend implementation.

use opendal::{FuturesBytesStream, Operator, services};

use crate::TRACING_TARGET;
use crate::config::StorageConfig;
use crate::error::{StorageError, StorageResult};

/// S3-backed object storage for raw report content.
///
/// Cheap to clone; the underlying [`Operator`] is reference counted and safe
/// to share across concurrent requests.
#[derive(Clone)]
pub struct StorageBackend {
    operator: Operator,
    config: StorageConfig,
}

impl StorageBackend {
    /// Creates a new storage backend from configuration.
    ///
    /// Construction is lazy: no connection is made until the first operation.
    pub async fn new(config: StorageConfig) -> StorageResult<Self> {
        config.validate()?;
        let operator = Self::create_operator(&config)?;

        tracing::info!(
            target: TRACING_TARGET,
            bucket = %config.bucket,
            endpoint = ?config.endpoint,
            "Storage backend initialized"
        );

        Ok(Self { operator, config })
    }

    /// Returns the configuration for this backend.
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Writes an object under the given key with an explicit content type.
    pub async fn write(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<()> {
        tracing::debug!(
            target: TRACING_TARGET,
            key = %key,
            size = data.len(),
            content_type = %content_type,
            "Writing object"
        );

        self.operator
            .write_with(key, data)
            .content_type(content_type)
            .await?;

        tracing::debug!(
            target: TRACING_TARGET,
            key = %key,
            "Object write complete"
        );

        Ok(())
    }

    /// Gets metadata for an object.
    pub async fn stat(&self, key: &str) -> StorageResult<ObjectMetadata> {
        let meta = self.operator.stat(key).await?;

        // Sub-second precision is dropped in the conversion.
        let last_modified = meta
            .last_modified()
            .and_then(|dt| jiff::Timestamp::from_second(dt.timestamp()).ok());

        Ok(ObjectMetadata {
            size: meta.content_length(),
            last_modified,
            content_type: meta.content_type().map(|s| s.to_string()),
        })
    }

    /// Opens a lazy byte stream over the object at `key`.
    ///
    /// The stream is single-pass and non-restartable: chunks are fetched as
    /// the caller polls, and an I/O failure mid-stream ends it without any
    /// rewind or retry.
    pub async fn read_stream(&self, key: &str) -> StorageResult<FuturesBytesStream> {
        tracing::debug!(
            target: TRACING_TARGET,
            key = %key,
            "Opening object read stream"
        );

        let reader = self.operator.reader(key).await?;
        let stream = reader.into_bytes_stream(..).await?;

        Ok(stream)
    }

    /// Creates an OpenDAL operator based on configuration.
    fn create_operator(config: &StorageConfig) -> StorageResult<Operator> {
        let mut builder = services::S3::default().bucket(&config.bucket);

        if let Some(ref region) = config.region {
            builder = builder.region(region);
        }

        if let Some(ref endpoint) = config.endpoint {
            builder = builder.endpoint(endpoint);
        }

        if let Some(ref access_key_id) = config.access_key_id {
            builder = builder.access_key_id(access_key_id);
        }

        if let Some(ref secret_access_key) = config.secret_access_key {
            builder = builder.secret_access_key(secret_access_key);
        }

        Operator::new(builder)
            .map(|op| op.finish())
            .map_err(|e| StorageError::init(e.to_string()))
    }
}

/// Object metadata.
#[derive(Debug, Clone)]
pub struct ObjectMetadata {
    /// Object size in bytes.
    pub size: u64,
    /// Last modification time.
    pub last_modified: Option<jiff::Timestamp>,
    /// Content type / MIME type.
    pub content_type: Option<String>,
}

impl std::fmt::Debug for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageBackend")
            .field("bucket", &self.config.bucket)
            .field("endpoint", &self.config.endpoint)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builds_operator_without_connecting() {
        let config = StorageConfig::new("scanhub-reports")
            .with_region("us-east-1")
            .with_endpoint("http://localhost:9000")
            .with_credentials("minioadmin", "minioadmin");

        let backend = StorageBackend::new(config).await;
        assert!(backend.is_ok());
    }

    #[tokio::test]
    async fn rejects_invalid_config() {
        let config = StorageConfig::new("");
        let backend = StorageBackend::new(config).await;
        assert!(backend.is_err());
    }

    #[tokio::test]
    async fn debug_omits_credentials() {
        let config = StorageConfig::new("scanhub-reports")
            .with_region("us-east-1")
            .with_endpoint("http://localhost:9000")
            .with_credentials("AKIAEXAMPLE", "super-secret");

        let backend = StorageBackend::new(config).await.unwrap();
        let rendered = format!("{backend:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(!rendered.contains("AKIAEXAMPLE"));
    }
}
