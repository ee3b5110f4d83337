use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path as AxumPath};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;

use crate::handler::{Error, ErrorKind};

/// Enhanced path parameter extractor with improved error handling.
///
/// Delegates to the default Axum [`Path`] extractor and maps rejections
/// to structured error responses. Deserialization failures include
/// type-specific guidance, so an identifier that is not a valid UUID
/// tells the caller what a UUID looks like.
///
/// [`Path`]: AxumPath
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Path<T>(pub T);

impl<T> Path<T> {
    /// Creates a new instance of [`Path`].
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Returns the inner path parameters.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let extractor =
            <AxumPath<T> as FromRequestParts<S>>::from_request_parts(parts, state).await;
        extractor.map(|x| Self(x.0)).map_err(Into::into)
    }
}

impl From<PathRejection> for Error<'static> {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(err) => {
                let error_message = err.to_string();
                let enhanced_context = enhance_deserialization_error(&error_message);

                ErrorKind::BadRequest
                    .with_message("Invalid path parameter format")
                    .with_context(format!(
                        "Path parameter deserialization failed: {}. {}",
                        sanitize_error_message(&error_message),
                        enhanced_context
                    ))
            }
            PathRejection::MissingPathParams(err) => {
                let error_message = err.to_string();

                ErrorKind::MissingPathParam
                    .with_message("Required path parameter missing")
                    .with_context(format!(
                        "Path parameter extraction failed: {}. Ensure all required parameters are present in the URL path and match the expected route pattern.",
                        sanitize_error_message(&error_message)
                    ))
            }
            _ => {
                ErrorKind::InternalServerError
                    .with_message("Path processing failed")
                    .with_context("Unexpected error occurred during path parameter processing. This may indicate a routing configuration issue.")
            }
        }
    }
}

/// Enhances deserialization error messages with type-specific guidance.
fn enhance_deserialization_error(error_message: &str) -> &'static str {
    let error_lower = error_message.to_lowercase();

    if error_lower.contains("uuid") || error_lower.contains("invalid character") {
        "UUID parameters must be in format: xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx (32 hexadecimal digits with hyphens)"
    } else if error_lower.contains("invalid digit") || error_lower.contains("cannot parse") {
        "Numeric parameters must contain only digits and be within the valid range for the expected type"
    } else if error_lower.contains("bool") {
        "Boolean parameters must be 'true' or 'false'"
    } else {
        "Check that the parameter format matches the expected type definition"
    }
}

/// Sanitizes error messages to prevent information leakage while keeping them useful.
fn sanitize_error_message(message: &str) -> String {
    // Limit to first 2 lines to prevent excessive verbosity.
    message
        .lines()
        .take(2)
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(150) // Limit message length
        .collect()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::routing::{Router, get};
    use axum_test::TestServer;
    use serde::Deserialize;
    use uuid::Uuid;

    use super::Path;

    #[derive(Debug, Deserialize)]
    struct Params {
        id: Uuid,
    }

    async fn show(Path(params): Path<Params>) -> String {
        params.id.to_string()
    }

    fn test_server() -> anyhow::Result<TestServer> {
        let router = Router::new().route("/reports/{id}", get(show));
        Ok(TestServer::new(router)?)
    }

    #[tokio::test]
    async fn valid_uuid_is_extracted() -> anyhow::Result<()> {
        let server = test_server()?;
        let id = Uuid::new_v4();

        let response = server.get(&format!("/reports/{id}")).await;
        response.assert_status_ok();
        assert_eq!(response.text(), id.to_string());

        Ok(())
    }

    #[tokio::test]
    async fn invalid_uuid_is_a_bad_request() -> anyhow::Result<()> {
        let server = test_server()?;

        let response = server.get("/reports/not-a-uuid").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["name"], "bad_request");
        assert!(body["context"].as_str().unwrap_or_default().contains("UUID"));

        Ok(())
    }
}
