use axum::routing::Router;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};
use utoipa_swagger_ui::SwaggerUi;

use super::OpenApiConfig;

/// Generates the OpenApi object.
#[derive(Debug, OpenApi)]
#[openapi(tags(
    (name = "reports", description = "Scan report ingestion and retrieval"),
    (name = "health", description = "Service health monitoring"),
))]
struct ApiDoc;

/// Extension trait for `axum::`[`Router`] for [`OpenApi`](utoipa::OpenApi).
pub trait RouterOpenApiExt<S> {
    /// Merges with [`OpenApi`](utoipa::OpenApi) routes.
    ///
    /// Splits the collected route documentation out of the router and mounts
    /// it at the configured paths, together with interactive UIs.
    fn with_open_api(self, config: OpenApiConfig) -> Router<S>;
}

impl<S> RouterOpenApiExt<S> for OpenApiRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_open_api(self, config: OpenApiConfig) -> Router<S> {
        let (router, open_api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(self)
            .split_for_parts();

        router
            .merge(SwaggerUi::new(config.swagger_ui).url(config.open_api_json, open_api.clone()))
            .merge(Scalar::with_url(config.scalar_ui, open_api))
    }
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use utoipa_axum::router::OpenApiRouter;

    use super::*;

    #[tokio::test]
    async fn serves_the_openapi_document() -> anyhow::Result<()> {
        let router: Router = OpenApiRouter::new().with_open_api(OpenApiConfig::default());
        let server = TestServer::new(router)?;

        let response = server.get("/api/openapi.json").await;
        response.assert_status_ok();

        let document: serde_json::Value = response.json();
        assert!(document["openapi"].is_string());
        assert_eq!(document["info"]["title"], "scanhub-server");

        Ok(())
    }

    #[tokio::test]
    async fn serves_the_documentation_uis() -> anyhow::Result<()> {
        let router: Router = OpenApiRouter::new().with_open_api(OpenApiConfig::default());
        let server = TestServer::new(router)?;

        let swagger = server.get("/api/swagger").await.status_code();
        assert!(swagger.is_success() || swagger.is_redirection());

        let scalar = server.get("/api/scalar").await.status_code();
        assert!(scalar.is_success());

        Ok(())
    }
}
