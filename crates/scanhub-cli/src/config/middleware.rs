//! Middleware configuration for the HTTP server.
//!
//! Groups the CLI-configurable middleware settings: CORS and OpenAPI
//! documentation paths. Both configs are re-exported from `scanhub-server`
//! and support CLI arguments as well as environment variables.
//!
//! # Example
//!
//! ```bash
//! # Configure CORS origins and the OpenAPI document path
//! scanhub-cli --allowed-origins "https://example.com" --open-api-json "/docs/openapi.json"
//! ```

use clap::Args;
use scanhub_server::middleware::{CorsConfig, OpenApiConfig};
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_CONFIG;

/// Middleware configuration combining CORS and OpenAPI settings.
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// CORS (Cross-Origin Resource Sharing) configuration.
    ///
    /// Controls which origins can access the API and whether credentials
    /// are allowed in cross-origin requests.
    #[clap(flatten)]
    pub cors: CorsConfig,

    /// OpenAPI documentation configuration.
    ///
    /// Configures the paths where the OpenAPI JSON document and the
    /// interactive documentation UIs are served.
    #[clap(flatten)]
    pub openapi: OpenApiConfig,
}

impl MiddlewareConfig {
    /// Logs middleware configuration at info level.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            origins = ?self.cors.allowed_origins,
            credentials = self.cors.allow_credentials,
            "CORS configuration"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            openapi_path = %self.openapi.open_api_json,
            swagger_path = %self.openapi.swagger_ui,
            scalar_path = %self.openapi.scalar_ui,
            "OpenAPI configuration"
        );
    }
}
