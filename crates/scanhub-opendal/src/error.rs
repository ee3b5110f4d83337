//! Storage error types.

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Failed to initialize the storage backend.
    #[error("storage initialization failed: {0}")]
    Init(String),

    /// Object not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Read operation failed.
    #[error("read failed: {0}")]
    Read(String),

    /// Write operation failed.
    #[error("write failed: {0}")]
    Write(String),

    /// Invalid object key.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Backend-specific error.
    #[error("backend error: {0}")]
    Backend(opendal::Error),
}

impl StorageError {
    /// Creates a new initialization error.
    pub fn init(msg: impl Into<String>) -> Self {
        Self::Init(msg.into())
    }

    /// Creates a new not found error.
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound(key.into())
    }

    /// Creates a new read error.
    pub fn read(msg: impl Into<String>) -> Self {
        Self::Read(msg.into())
    }

    /// Creates a new write error.
    pub fn write(msg: impl Into<String>) -> Self {
        Self::Write(msg.into())
    }

    /// Creates a new invalid key error.
    pub fn invalid_key(msg: impl Into<String>) -> Self {
        Self::InvalidKey(msg.into())
    }

    /// Returns `true` if the error indicates a missing object.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<opendal::Error> for StorageError {
    fn from(err: opendal::Error) -> Self {
        use opendal::ErrorKind;

        match err.kind() {
            ErrorKind::NotFound => Self::NotFound(err.to_string()),
            ErrorKind::PermissionDenied => Self::PermissionDenied(err.to_string()),
            _ => Self::Backend(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_classified() {
        assert!(StorageError::not_found("report-scan-42.json").is_not_found());
        assert!(!StorageError::write("boom").is_not_found());
    }

    #[test]
    fn display_includes_key() {
        let err = StorageError::not_found("report-scan-42.json");
        assert_eq!(err.to_string(), "not found: report-scan-42.json");
    }

    #[test]
    fn constructors_map_to_variants() {
        assert!(matches!(StorageError::init("x"), StorageError::Init(_)));
        assert!(matches!(StorageError::read("x"), StorageError::Read(_)));
        assert!(matches!(StorageError::write("x"), StorageError::Write(_)));
        assert!(matches!(
            StorageError::invalid_key("x"),
            StorageError::InvalidKey(_)
        ));
    }
}
