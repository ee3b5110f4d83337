//! HTTP server startup with lifecycle management.
//!
//! This module wires configuration validation, address binding, signal
//! handling, and graceful shutdown around an Axum router.

mod error;
mod http_server;
mod shutdown;

pub use error::{Result, ServerError};
pub use http_server::serve;
use shutdown::shutdown_signal;
