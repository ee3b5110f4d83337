//! HTTP server startup and lifecycle management.

use std::future::Future;
use std::io;
use std::time::Instant;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::server::{Result, ServerError, shutdown_signal};
use crate::{TRACING_TARGET_SERVER_SHUTDOWN, TRACING_TARGET_SERVER_STARTUP};

/// Starts the HTTP server with graceful shutdown.
///
/// Validates the configuration, binds to the configured address, and serves
/// requests until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if:
/// - Server configuration is invalid
/// - Cannot bind to the specified address/port
/// - Server encounters a fatal error during operation
pub async fn serve(app: Router, server_config: ServerConfig) -> Result<()> {
    if let Err(validation_error) = server_config.validate() {
        tracing::error!(
            target: TRACING_TARGET_SERVER_STARTUP,
            error = %validation_error,
            "Invalid server configuration"
        );

        return Err(ServerError::invalid_config(&validation_error));
    }

    let server_addr = server_config.server_addr();

    let listener = match TcpListener::bind(server_addr).await {
        Ok(listener) => {
            tracing::info!(
                target: TRACING_TARGET_SERVER_STARTUP,
                addr = %server_addr,
                "Successfully bound to address"
            );

            listener
        }
        Err(listener_err) => {
            let error = ServerError::bind_error(&server_addr.to_string(), listener_err);
            tracing::error!(
                target: TRACING_TARGET_SERVER_STARTUP,
                addr = %server_addr,
                error = %error,
                error_code = error.error_code(),
                suggestion = error.suggestion(),
                "Failed to bind to address"
            );

            return Err(error);
        }
    };

    let shutdown = shutdown_signal(server_config.shutdown_timeout());
    serve_with_shutdown(&server_config, || async move {
        axum::serve(listener, app.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await
    })
    .await
}

/// Runs the server future with startup and shutdown logging.
///
/// Logs readiness before the server starts, warns when the bind address is
/// reachable from all interfaces, and reports uptime once the future resolves.
async fn serve_with_shutdown<F>(
    server_config: &ServerConfig,
    serve_fn: impl FnOnce() -> F,
) -> Result<()>
where
    F: Future<Output = io::Result<()>>,
{
    let start_time = Instant::now();

    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        addr = %server_config.server_addr(),
        development_mode = server_config.is_development(),
        "Server is ready and listening for connections"
    );

    if server_config.binds_to_all_interfaces() {
        tracing::warn!(
            target: TRACING_TARGET_SERVER_STARTUP,
            "Server is bound to all interfaces, ensure firewall rules are configured"
        );
    }

    if let Err(err) = serve_fn().await {
        let error = ServerError::Runtime(err);
        tracing::error!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            error = %error,
            error_code = error.error_code(),
            recoverable = error.is_recoverable(),
            uptime_secs = start_time.elapsed().as_secs(),
            "Server encountered a fatal error"
        );

        if let Some(suggestion) = error.suggestion() {
            tracing::info!(
                target: TRACING_TARGET_SERVER_SHUTDOWN,
                suggestion = suggestion,
                "Recovery suggestion"
            );
        }

        return Err(error);
    }

    tracing::info!(
        target: TRACING_TARGET_SERVER_SHUTDOWN,
        uptime_secs = start_time.elapsed().as_secs(),
        "Server shut down gracefully"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clean_exit_reports_success() {
        let config = ServerConfig::default();
        let result = serve_with_shutdown(&config, || async { Ok(()) }).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn serve_errors_surface_as_runtime_errors() {
        let config = ServerConfig::default();
        let result =
            serve_with_shutdown(&config, || async { Err(io::Error::other("test error")) }).await;

        assert!(matches!(result, Err(ServerError::Runtime(_))));
    }
}
