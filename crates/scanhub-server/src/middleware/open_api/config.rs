use serde::{Deserialize, Serialize};

/// App [`OpenApi`](utoipa::OpenApi) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(clap::Args))]
#[must_use = "config does nothing unless you use it"]
pub struct OpenApiConfig {
    /// Path which exposes the OpenApi document to the user.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "OPENAPI_JSON_PATH", default_value = "/api/openapi.json")
    )]
    pub open_api_json: String,

    /// Path which exposes SwaggerUI to the user.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "SWAGGER_UI_PATH", default_value = "/api/swagger")
    )]
    pub swagger_ui: String,

    /// Path which exposes Scalar to the user.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "SCALAR_UI_PATH", default_value = "/api/scalar")
    )]
    pub scalar_ui: String,
}

impl Default for OpenApiConfig {
    fn default() -> Self {
        Self {
            open_api_json: "/api/openapi.json".to_owned(),
            swagger_ui: "/api/swagger".to_owned(),
            scalar_ui: "/api/scalar".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_are_absolute() {
        let config = OpenApiConfig::default();
        assert!(config.open_api_json.starts_with('/'));
        assert!(config.swagger_ui.starts_with('/'));
        assert!(config.scalar_ui.starts_with('/'));
    }
}
