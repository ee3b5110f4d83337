use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::handler::ErrorKind;

type Panic = Box<dyn Any + Send + 'static>;

/// Transforms any panic into an error [`Response`].
pub fn catch_panic(err: Panic) -> Response {
    if let Some(panic) = err.downcast_ref::<String>() {
        tracing::error!(
            target: "scanhub_server::middleware::panic",
            "service panic: {}", panic,
        );
    } else if let Some(panic) = err.downcast_ref::<&str>() {
        tracing::error!(
            target: "scanhub_server::middleware::panic",
            "service panic: {}", panic,
        );
    } else {
        tracing::error!(
            target: "scanhub_server::middleware::panic",
            "service panic: unknown panic type",
        );
    }

    ErrorKind::InternalServerError.into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn panics_map_to_internal_server_error() {
        let payload: Panic = Box::new("stream poll failed".to_string());

        let response = catch_panic(payload);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
