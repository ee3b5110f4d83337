//! OpenAPI document generation and interactive documentation UIs.

mod config;
mod extensions;

pub use config::OpenApiConfig;
pub use extensions::RouterOpenApiExt;
