//! Service health monitoring handlers.
//!
//! Provides the public health probe used by load balancers and deployment
//! checks. The probe reports liveness only; it does not reach out to the
//! backing stores.

use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::extract::Json;
use crate::handler::response::HealthResponse;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "scanhub_server::handler::monitors";

/// Reports the current health of the service.
#[tracing::instrument]
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Get service health status",
    responses(
        (
            status = 200,
            description = "Service is healthy",
            body = HealthResponse,
        ),
    ),
)]
async fn health_status() -> Json<HealthResponse> {
    let response = HealthResponse::default();

    tracing::debug!(
        target: TRACING_TARGET,
        status = %response.status,
        "Health status check"
    );

    Json(response)
}

/// Returns a [`Router`] with all health monitoring routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new().routes(routes!(health_status))
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::routing::get;
    use axum_test::TestServer;

    use super::*;

    #[tokio::test]
    async fn health_endpoint_reports_healthy() -> anyhow::Result<()> {
        let router: Router = Router::new().route("/health", get(health_status));
        let server = TestServer::new(router)?;

        let response = server.get("/health").await;
        response.assert_status_ok();

        let health = response.json::<HealthResponse>();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.service, "scanhub-server");

        Ok(())
    }

    #[tokio::test]
    async fn health_timestamp_is_recent() -> anyhow::Result<()> {
        let router: Router = Router::new().route("/health", get(health_status));
        let server = TestServer::new(router)?;

        let response = server.get("/health").await;
        response.assert_status_ok();

        let health = response.json::<HealthResponse>();
        let age = jiff::Timestamp::now().as_second() - health.timestamp.as_second();
        assert!(age < 60, "health timestamp should be recent");

        Ok(())
    }
}
