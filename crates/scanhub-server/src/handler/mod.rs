//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! # Usage Example
//!
//! ```rust
//! use scanhub_server::handler::openapi_routes;
//! use scanhub_server::middleware::{OpenApiConfig, RouterOpenApiExt};
//! use scanhub_server::service::{ServiceConfig, ServiceState};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServiceConfig::default();
//! let state = ServiceState::from_config(&config).await?;
//!
//! // Create the complete router with OpenAPI documentation
//! let router: axum::Router = openapi_routes()
//!     .with_state(state)
//!     .with_open_api(OpenApiConfig::default());
//! # Ok(())
//! # }
//! ```
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod error;
mod monitors;
mod reports;
mod response;

use axum::response::{IntoResponse, Response};
use utoipa_axum::router::OpenApiRouter;

pub use crate::handler::error::{Error, ErrorKind, Result};
pub(crate) use crate::handler::response::ErrorResponse;
use crate::service::ServiceState;

#[inline]
async fn handler() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns an [`OpenApiRouter`] with all routes.
pub fn openapi_routes() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new()
        .merge(reports::routes())
        .merge(monitors::routes())
        .fallback(handler)
}

#[cfg(test)]
mod test {
    use axum_test::TestServer;

    use super::*;

    #[tokio::test]
    async fn unknown_routes_fall_back_to_not_found() -> anyhow::Result<()> {
        let app = axum::Router::new().fallback(handler);
        let server = TestServer::new(app)?;

        let response = server.get("/unknown").await;
        response.assert_status_not_found();

        let body: serde_json::Value = response.json();
        assert_eq!(body["name"], "not_found");

        Ok(())
    }

    #[test]
    fn openapi_document_covers_all_routes() {
        let (_, api) = openapi_routes().split_for_parts();

        let paths = &api.paths.paths;
        assert_eq!(paths.len(), 4);
        assert!(paths.contains_key("/reports"));
        assert!(paths.contains_key("/reports/{id}"));
        assert!(paths.contains_key("/reports/{id}/download"));
        assert!(paths.contains_key("/health"));
    }
}
