//! Middleware for `axum::Router` and HTTP request processing.
//!
//! This module provides middleware for:
//! - Security (CORS, body limits, compression)
//! - Observability (tracing, request IDs)
//! - Error handling (panics, timeouts, service errors)
//! - OpenAPI documentation
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use axum::Router;
//! use scanhub_server::middleware::RouterExt;
//!
//! let app: Router = Router::new()
//!     .with_error_handling_layer(Duration::from_secs(30))
//!     .with_observability_layer()
//!     .with_default_security_layer();
//! ```

mod error_handling;
mod extensions;
mod observability;
pub mod open_api;
pub mod security;

pub use extensions::RouterExt;
pub use open_api::{OpenApiConfig, RouterOpenApiExt};
pub use security::CorsConfig;
