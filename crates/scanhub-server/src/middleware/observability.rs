//! Observability middleware for monitoring and debugging.
//!
//! Request IDs are generated on the way in, attached to traces, and
//! propagated back on the response so a failing request can be correlated
//! across logs.

use axum::http::header;
use tower_http::request_id::MakeRequestUuid;
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::trace::TraceLayer;

/// Creates request ID maker for generating unique request IDs.
pub fn create_request_id_layer() -> tower_http::request_id::SetRequestIdLayer<MakeRequestUuid> {
    tower_http::request_id::SetRequestIdLayer::new(
        header::HeaderName::from_static("x-request-id"),
        MakeRequestUuid,
    )
}

/// Creates trace layer for HTTP logging.
pub fn create_trace_layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
}

/// Creates sensitive headers layer to redact auth info from logs.
pub fn create_sensitive_headers_layer() -> SetSensitiveRequestHeadersLayer {
    SetSensitiveRequestHeadersLayer::new([header::AUTHORIZATION, header::COOKIE])
}

/// Creates request ID propagation layer.
pub fn create_propagate_request_id_layer() -> tower_http::request_id::PropagateRequestIdLayer {
    tower_http::request_id::PropagateRequestIdLayer::new(header::HeaderName::from_static(
        "x-request-id",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_construction_does_not_panic() {
        let _ = create_request_id_layer();
        let _ = create_trace_layer();
        let _ = create_sensitive_headers_layer();
        let _ = create_propagate_request_id_layer();
    }
}
