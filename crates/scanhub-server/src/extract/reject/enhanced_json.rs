//! Enhanced JSON extractor with improved error handling.
//!
//! This module provides [`Json`], an enhanced version of [`axum::Json`]
//! with better error messages for the different rejection classes.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Json as AxumJson, Request};
use axum::response::{IntoResponse, Response};
use derive_more::{Deref, DerefMut, From};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::handler::{Error, ErrorKind};

/// Enhanced JSON extractor with improved error handling.
///
/// Delegates deserialization to the default Axum JSON extractor and maps
/// every rejection class to a structured error response with context that
/// tells the caller what to fix.
///
/// [`Json`]: AxumJson
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Creates a new [`Json`] wrapper around the provided value.
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Returns the inner value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequest<S> for Json<T>
where
    T: DeserializeOwned + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let extractor = <AxumJson<T> as FromRequest<S>>::from_request(req, state).await;
        extractor.map(|x| Self::new(x.0)).map_err(Into::into)
    }
}

impl<T> IntoResponse for Json<T>
where
    T: Serialize,
{
    #[inline]
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

impl From<JsonRejection> for Error<'static> {
    fn from(rejection: JsonRejection) -> Self {
        let error_context = format!("JSON rejection details: {:?}", rejection);

        match rejection {
            JsonRejection::JsonDataError(err) => {
                ErrorKind::BadRequest
                    .with_message("Invalid request data format")
                    .with_context(format!(
                        "JSON deserialization failed: {}. Verify that all required fields are present, have correct types, and match the expected schema.",
                        sanitize_error_message(&err.to_string())
                    ))
            }
            JsonRejection::JsonSyntaxError(err) => {
                ErrorKind::BadRequest
                    .with_message("Invalid JSON syntax in request body")
                    .with_context(format!(
                        "JSON parsing failed: {}. Ensure the request body contains well-formed JSON with proper syntax.",
                        sanitize_error_message(&err.to_string())
                    ))
            }
            JsonRejection::MissingJsonContentType(_) => {
                ErrorKind::BadRequest
                    .with_message("Invalid content type")
                    .with_context("Request must have Content-Type header set to 'application/json'. Include the header: Content-Type: application/json")
            }
            JsonRejection::BytesRejection(err) => {
                let message = err.to_string();
                if message.contains("length limit") {
                    ErrorKind::BadRequest
                        .with_message("Request body too large")
                        .with_context("Request body exceeds the maximum allowed size. Reduce the payload size and try again.")
                } else {
                    ErrorKind::BadRequest
                        .with_message("Failed to read request body")
                        .with_context(format!(
                            "Request body processing failed: {}. Body may be corrupted, incomplete, or connection interrupted.",
                            sanitize_error_message(&message)
                        ))
                }
            }
            _ => {
                ErrorKind::InternalServerError
                    .with_message("Request processing failed")
                    .with_context(format!(
                        "Unexpected error occurred during JSON request body processing: {}",
                        error_context
                    ))
            }
        }
    }
}

/// Sanitizes error messages to prevent information leakage while keeping them useful.
fn sanitize_error_message(message: &str) -> String {
    // Limit to first 3 lines to prevent excessive verbosity.
    let lines = message.lines().take(3).collect::<Vec<_>>();
    // Limit message length.
    lines.join(" ").chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::routing::{Router, post};
    use axum_test::TestServer;
    use serde::Deserialize;

    use super::Json;

    #[derive(Debug, Deserialize)]
    struct Payload {
        name: String,
    }

    async fn echo(Json(payload): Json<Payload>) -> String {
        payload.name
    }

    fn test_server() -> anyhow::Result<TestServer> {
        let router = Router::new().route("/echo", post(echo));
        Ok(TestServer::new(router)?)
    }

    #[tokio::test]
    async fn valid_json_passes_through() -> anyhow::Result<()> {
        let server = test_server()?;

        let response = server
            .post("/echo")
            .json(&serde_json::json!({ "name": "scan-42" }))
            .await;

        response.assert_status_ok();
        assert_eq!(response.text(), "scan-42");

        Ok(())
    }

    #[tokio::test]
    async fn malformed_json_is_a_bad_request() -> anyhow::Result<()> {
        let server = test_server()?;

        let response = server
            .post("/echo")
            .text("{not json")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<serde_json::Value>()["name"], "bad_request");

        Ok(())
    }

    #[tokio::test]
    async fn wrong_field_type_is_a_bad_request() -> anyhow::Result<()> {
        let server = test_server()?;

        let response = server
            .post("/echo")
            .json(&serde_json::json!({ "name": 17 }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    async fn missing_content_type_is_a_bad_request() -> anyhow::Result<()> {
        let server = test_server()?;

        let response = server.post("/echo").text(r#"{"name":"scan-42"}"#).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        Ok(())
    }
}
