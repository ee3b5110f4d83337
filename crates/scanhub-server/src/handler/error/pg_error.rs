//! Database error to HTTP error conversion.
//!
//! Every database failure maps to an opaque 500 response; the underlying
//! cause is logged here and never exposed to the client.

use scanhub_postgres::PgError;

use crate::handler::{Error, ErrorKind};

/// Tracing target for database failures surfaced through handlers.
const TRACING_TARGET: &str = "scanhub_server::postgres_errors";

impl From<PgError> for Error<'static> {
    fn from(error: PgError) -> Self {
        match error {
            PgError::Config(config_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %config_error,
                    "database configuration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Timeout(timeout) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    timeout = ?timeout,
                    "database timeout",
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Connection(connection_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %connection_error,
                    "database connection error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Migration(migration_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %migration_error,
                    "database migration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Query(query_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %query_error,
                    "query error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Unexpected(unexpected_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %unexpected_error,
                    "unexpected database error"
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
    fn config_error_maps_to_internal() {
        let error: Error = PgError::Config("bad pool size".into()).into();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
    }

    #[test]
    fn query_error_maps_to_internal() {
        let error: Error = PgError::Query(scanhub_postgres::error::DieselError::NotFound).into();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
    }
}
