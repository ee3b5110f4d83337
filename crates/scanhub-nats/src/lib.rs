#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for NATS client operations.
///
/// Use this target for logging client initialization, configuration, and client-level errors.
pub const TRACING_TARGET_CLIENT: &str = "scanhub_nats::client";

/// Tracing target for NATS JetStream operations.
///
/// Use this target for logging stream operations, publishing, and JetStream-related errors.
pub const TRACING_TARGET_STREAM: &str = "scanhub_nats::stream";

/// Tracing target for NATS connection operations.
pub const TRACING_TARGET_CONNECTION: &str = "scanhub_nats::connection";

mod client;
mod error;
pub mod stream;

// Re-export async_nats types needed by consumers
pub use async_nats::jetstream;
pub use client::{NatsClient, NatsConfig};
pub use error::{Error, Result};
pub use stream::{ReportEvent, ReportEventPublisher};
