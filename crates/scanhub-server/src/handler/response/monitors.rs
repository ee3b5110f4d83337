//! Health monitoring response types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Service health probe response.
#[must_use]
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall service status.
    pub status: String,
    /// Name of the responding service.
    pub service: String,
    /// Timestamp when this status was generated.
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: Timestamp,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "healthy".to_owned(),
            service: env!("CARGO_PKG_NAME").to_owned(),
            timestamp: Timestamp::now(),
        }
    }
}
