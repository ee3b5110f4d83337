//! Security middleware for HTTP requests.
//!
//! This module provides middleware for:
//! - CORS (Cross-Origin Resource Sharing) configuration
//! - Request body size limiting

use std::time::Duration;

use axum::http::{HeaderValue, Method, header};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;

/// Default maximum request body size: 16MB.
///
/// Scan reports are JSON documents that can run large, but anything past
/// this limit is more likely a runaway client than a real report.
pub const DEFAULT_MAX_BODY_SIZE: usize = 16 * 1024 * 1024;

/// Creates a request body size limit layer with a custom size.
pub(crate) fn create_body_limit_layer(max_size: usize) -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(max_size)
}

/// Creates a CORS layer based on the provided configuration.
///
/// The API only serves GET and POST; `Content-Disposition` is exposed so
/// browser clients can read the suggested filename on downloads.
pub(crate) fn create_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = config.to_header_values();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_DISPOSITION])
        .allow_credentials(config.allow_credentials)
        .max_age(config.max_age())
}

/// CORS (Cross-Origin Resource Sharing) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(clap::Args))]
#[must_use = "config does nothing unless you use it"]
pub struct CorsConfig {
    /// List of allowed CORS origins.
    /// If empty, defaults to localhost origins for development.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "CORS_ALLOWED_ORIGINS", value_delimiter = ',')
    )]
    pub allowed_origins: Vec<String>,

    /// Maximum age for CORS preflight requests in seconds.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "CORS_MAX_AGE", default_value = "3600")
    )]
    pub max_age_seconds: u64,

    /// Whether to allow credentials in CORS requests.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "CORS_ALLOW_CREDENTIALS", default_value = "false")
    )]
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_age_seconds: 3600,
            allow_credentials: false,
        }
    }
}

impl CorsConfig {
    /// Returns the CORS max age as a Duration.
    pub fn max_age(&self) -> Duration {
        Duration::from_secs(self.max_age_seconds)
    }

    /// Returns localhost origins for development.
    pub fn get_localhost_origins() -> Vec<HeaderValue> {
        vec![
            "http://localhost:3000".parse().unwrap(),
            "http://localhost:8080".parse().unwrap(),
            "http://127.0.0.1:3000".parse().unwrap(),
            "http://127.0.0.1:8080".parse().unwrap(),
        ]
    }

    /// Converts configured origins to HeaderValue list.
    pub fn to_header_values(&self) -> Vec<HeaderValue> {
        if self.allowed_origins.is_empty() {
            Self::get_localhost_origins()
        } else {
            self.allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_layer_from_custom_origins() {
        let config = CorsConfig {
            allowed_origins: vec!["https://scanhub.io".to_string()],
            max_age_seconds: 3600,
            allow_credentials: false,
        };

        let _layer = create_cors_layer(&config);
    }

    #[test]
    fn empty_origins_fall_back_to_localhost() {
        let config = CorsConfig::default();
        let origins = config.to_header_values();
        assert_eq!(origins.len(), 4);
    }

    #[test]
    fn configured_origins_are_parsed() {
        let config = CorsConfig {
            allowed_origins: vec![
                "https://scanhub.io".to_string(),
                "https://app.scanhub.io".to_string(),
            ],
            ..Default::default()
        };
        let origins = config.to_header_values();
        assert_eq!(origins.len(), 2);
    }

    #[test]
    fn body_limit_layer_construction() {
        let _layer = create_body_limit_layer(DEFAULT_MAX_BODY_SIZE);
    }
}
