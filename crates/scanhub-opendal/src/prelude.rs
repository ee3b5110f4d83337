//! Prelude module for convenient imports.

pub use crate::backend::{ObjectMetadata, StorageBackend};
pub use crate::config::StorageConfig;
pub use crate::error::{StorageError, StorageResult};
