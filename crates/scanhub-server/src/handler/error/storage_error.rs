//! Object storage error to HTTP error conversion.
//!
//! Storage failures always surface as 500 responses. A missing object is
//! no exception: handlers only touch storage for keys recorded in report
//! metadata, so an absent blob means the stores have diverged, not that
//! the client asked for something unknown.

use scanhub_opendal::StorageError;

use crate::handler::{Error, ErrorKind};

/// Tracing target for storage failures surfaced through handlers.
const TRACING_TARGET: &str = "scanhub_server::storage_errors";

impl From<StorageError> for Error<'static> {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::Init(message) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %message,
                    "storage backend initialization error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            StorageError::NotFound(key) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    key = %key,
                    "report content missing from object storage"
                );
                ErrorKind::InternalServerError
                    .with_message("Report content is unavailable")
                    .into_static()
            }
            StorageError::PermissionDenied(message) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %message,
                    "storage access denied"
                );
                ErrorKind::InternalServerError.into_error()
            }
            StorageError::Read(message) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %message,
                    "object read failed"
                );
                ErrorKind::InternalServerError
                    .with_message("Report content is unavailable")
                    .into_static()
            }
            StorageError::Write(message) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %message,
                    "object write failed"
                );
                ErrorKind::InternalServerError
                    .with_message("Failed to store report content")
                    .into_static()
            }
            StorageError::InvalidKey(message) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %message,
                    "invalid object key"
                );
                ErrorKind::InternalServerError.into_error()
            }
            StorageError::Backend(backend_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %backend_error,
                    "storage backend error"
                );
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_object_is_a_server_error() {
        let error: Error = StorageError::not_found("report-scan-42.json").into();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
    }

    #[test]
    fn write_failure_maps_to_internal() {
        let error: Error = StorageError::write("bucket unreachable").into();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
        assert_eq!(error.message(), Some("Failed to store report content"));
    }
}
