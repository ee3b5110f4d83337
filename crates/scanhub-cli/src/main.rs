#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use axum::Router;
use scanhub_server::handler::openapi_routes;
use scanhub_server::middleware::{RouterExt, RouterOpenApiExt};
use scanhub_server::service::ServiceState;

use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_SERVER_STARTUP: &str = "scanhub_cli::server::startup";
pub const TRACING_TARGET_SERVER_SHUTDOWN: &str = "scanhub_cli::server::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "scanhub_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing();
    cli.validate()?;
    cli.log();

    let state = ServiceState::from_config(&cli.service)
        .await
        .context("failed to create service state")?;
    let router = create_router(state, &cli);

    server::serve(router, cli.server).await?;

    Ok(())
}

/// Creates the router with all middleware layers applied.
///
/// Middleware is applied in reverse order (last added = outermost):
/// 1. Error handling (outermost) - catches panics and enforces timeouts
/// 2. Observability - request IDs and tracing spans
/// 3. Security - CORS, body limits, compression
/// 4. Routes (innermost) - actual request handlers
fn create_router(state: ServiceState, cli: &Cli) -> Router {
    let api_routes: Router = openapi_routes()
        .with_state(state)
        .with_open_api(cli.middleware.openapi.clone());

    api_routes
        .with_security_layer(cli.middleware.cors.clone())
        .with_observability_layer()
        .with_error_handling_layer(cli.server.request_timeout())
}
