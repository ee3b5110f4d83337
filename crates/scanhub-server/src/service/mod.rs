//! Application state and dependency injection.

mod config;

use scanhub_nats::ReportEventPublisher;
use scanhub_opendal::StorageBackend;
use scanhub_postgres::PgClient;

pub use crate::service::config::ServiceConfig;
// Re-export error types from crate root for convenience
pub use crate::{Error, Result};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    pub postgres: PgClient,
    pub storage: StorageBackend,
    pub report_events: ReportEventPublisher,
}

impl ServiceState {
    /// Initializes application state from configuration.
    ///
    /// Connects to all external services and applies pending migrations.
    pub async fn from_config(config: &ServiceConfig) -> Result<Self> {
        let service_state = Self {
            postgres: config.connect_postgres().await?,
            storage: config.connect_storage().await?,
            report_events: config.connect_nats().await?,
        };

        Ok(service_state)
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(postgres: PgClient);
impl_di!(storage: StorageBackend);
impl_di!(report_events: ReportEventPublisher);
