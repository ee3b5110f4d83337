//! Scan report ingestion and retrieval handlers.
//!
//! # Endpoints
//!
//! - `POST /reports` - Ingest a new scan report
//! - `GET /reports/{id}` - Fetch report metadata
//! - `GET /reports/{id}/download` - Download stored report content
//!
//! # Ingestion Pipeline
//!
//! 1. **Validation**: Reject requests without a scan identifier or content
//! 2. **Storage**: Write the report content to object storage
//! 3. **Metadata**: Record the report row in Postgres
//! 4. **Events**: Publish a report event for downstream workers
//!
//! The steps run strictly in that order. A metadata failure after a
//! successful content write leaves the object in place; no cleanup is
//! attempted. Event publishing is best-effort and never fails the request.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::IntoResponse;
use scanhub_nats::{ReportEvent, ReportEventPublisher};
use scanhub_opendal::StorageBackend;
use scanhub_postgres::PgClient;
use scanhub_postgres::model::NewReport;
use scanhub_postgres::query::ReportRepository;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use uuid::Uuid;

use crate::extract::{Json, Path};
use crate::handler::response::ReportResponse;
use crate::handler::{ErrorKind, ErrorResponse, Result};
use crate::service::ServiceState;

/// Tracing target for report operations.
const TRACING_TARGET: &str = "scanhub_server::handler::reports";

/// Content type recorded for stored report objects.
const REPORT_CONTENT_TYPE: &str = "application/json";

/// `Path` param for `{id}` handlers.
#[must_use]
#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ReportPathParams {
    /// Unique identifier of the report.
    pub id: Uuid,
}

/// Request to ingest a new scan report.
#[must_use]
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
    /// Identifier of the scan that produced the report.
    pub scan_id: String,
    /// Raw report content.
    pub content: String,
}

/// Returns the object storage key for a scan's report content.
fn report_object_key(scan_id: &str) -> String {
    format!("report-{scan_id}.json")
}

/// Validates an ingestion request before any storage work starts.
fn validate_create_request(request: &CreateReportRequest) -> Result<()> {
    if request.scan_id.is_empty() {
        return Err(ErrorKind::BadRequest
            .with_message("Missing scan identifier")
            .with_context("scanId must not be empty"));
    }

    if request.content.is_empty() {
        return Err(ErrorKind::BadRequest
            .with_message("Missing report content")
            .with_context("content must not be empty"));
    }

    Ok(())
}

/// Builds the response headers for a report content download.
fn download_headers(object_key: &str, size: u64) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(REPORT_CONTENT_TYPE),
    );

    let disposition = format!("attachment; filename={object_key}");
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)
            .unwrap_or_else(|_| HeaderValue::from_static("attachment")),
    );

    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(size));
    headers
}

/// Ingests a scan report and stores it for later retrieval.
#[tracing::instrument(skip_all, fields(scan_id = %request.scan_id))]
#[utoipa::path(
    post, path = "/reports", tag = "reports",
    request_body = CreateReportRequest,
    responses(
        (
            status = BAD_REQUEST,
            description = "Bad request - missing scan identifier or content",
            body = ErrorResponse,
        ),
        (
            status = INTERNAL_SERVER_ERROR,
            description = "Internal server error",
            body = ErrorResponse,
        ),
        (
            status = OK,
            description = "Report stored successfully",
            body = ReportResponse,
        ),
    )
)]
async fn create_report(
    State(postgres): State<PgClient>,
    State(storage): State<StorageBackend>,
    State(report_events): State<ReportEventPublisher>,
    Json(request): Json<CreateReportRequest>,
) -> Result<(StatusCode, Json<ReportResponse>)> {
    validate_create_request(&request)?;

    let key = report_object_key(&request.scan_id);

    tracing::debug!(
        target: TRACING_TARGET,
        key = %key,
        size = request.content.len(),
        "Storing report content"
    );

    storage
        .write(&key, request.content.into_bytes(), REPORT_CONTENT_TYPE)
        .await?;

    let new_report = NewReport {
        scan_id: request.scan_id,
        object_key: key.clone(),
    };

    let report = postgres.create_report(new_report).await.map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET,
            error = %err,
            key = %key,
            "Failed to record report metadata, content object is orphaned"
        );
        ErrorKind::InternalServerError.with_message("Failed to save report metadata")
    })?;

    let event = ReportEvent {
        report_id: report.id,
        scan_id: report.scan_id.clone(),
    };

    if let Err(err) = report_events.publish(&event).await {
        tracing::warn!(
            target: TRACING_TARGET,
            error = %err,
            report_id = %report.id,
            "Failed to publish report event"
        );
    }

    tracing::info!(
        target: TRACING_TARGET,
        report_id = %report.id,
        key = %report.object_key,
        "Report stored"
    );

    Ok((StatusCode::OK, Json(ReportResponse::from(report))))
}

/// Fetches report metadata by its identifier.
#[tracing::instrument(skip(postgres))]
#[utoipa::path(
    get, path = "/reports/{id}", tag = "reports",
    params(ReportPathParams),
    responses(
        (
            status = BAD_REQUEST,
            description = "Bad request - malformed report identifier",
            body = ErrorResponse,
        ),
        (
            status = NOT_FOUND,
            description = "Report not found",
            body = ErrorResponse,
        ),
        (
            status = INTERNAL_SERVER_ERROR,
            description = "Internal server error",
            body = ErrorResponse,
        ),
        (
            status = OK,
            description = "Report metadata",
            body = ReportResponse,
        ),
    )
)]
async fn get_report(
    State(postgres): State<PgClient>,
    Path(path_params): Path<ReportPathParams>,
) -> Result<(StatusCode, Json<ReportResponse>)> {
    let report = postgres
        .find_report_by_id(path_params.id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("report"))?;

    Ok((StatusCode::OK, Json(ReportResponse::from(report))))
}

/// Downloads the stored content of a report.
#[tracing::instrument(skip(postgres, storage))]
#[utoipa::path(
    get, path = "/reports/{id}/download", tag = "reports",
    params(ReportPathParams),
    responses(
        (
            status = BAD_REQUEST,
            description = "Bad request - malformed report identifier",
            body = ErrorResponse,
        ),
        (
            status = NOT_FOUND,
            description = "Report not found",
            body = ErrorResponse,
        ),
        (
            status = INTERNAL_SERVER_ERROR,
            description = "Internal server error",
            body = ErrorResponse,
        ),
        (
            status = OK,
            description = "Report content download",
            content_type = "application/json",
        ),
    )
)]
async fn download_report(
    State(postgres): State<PgClient>,
    State(storage): State<StorageBackend>,
    Path(path_params): Path<ReportPathParams>,
) -> Result<impl IntoResponse> {
    let report = postgres
        .find_report_by_id(path_params.id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("report"))?;

    tracing::debug!(
        target: TRACING_TARGET,
        report_id = %report.id,
        key = %report.object_key,
        "Streaming report content from storage"
    );

    let metadata = storage.stat(&report.object_key).await?;
    let headers = download_headers(&report.object_key, metadata.size);
    let stream = storage.read_stream(&report.object_key).await?;

    tracing::info!(
        target: TRACING_TARGET,
        report_id = %report.id,
        size = metadata.size,
        "Report content download started"
    );

    Ok((StatusCode::OK, headers, Body::from_stream(stream)))
}

/// Returns a [`Router`] with all related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new()
        .routes(routes!(create_report))
        .routes(routes!(get_report))
        .routes(routes!(download_report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_keys_follow_the_report_naming_scheme() {
        assert_eq!(report_object_key("scan-42"), "report-scan-42.json");
        assert_eq!(report_object_key("a"), "report-a.json");
    }

    #[test]
    fn ingestion_validation_rejects_empty_fields() {
        let missing_scan = CreateReportRequest {
            scan_id: String::new(),
            content: "{}".to_owned(),
        };
        let error = validate_create_request(&missing_scan).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::BadRequest);

        let missing_content = CreateReportRequest {
            scan_id: "scan-42".to_owned(),
            content: String::new(),
        };
        let error = validate_create_request(&missing_content).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::BadRequest);

        let valid = CreateReportRequest {
            scan_id: "scan-42".to_owned(),
            content: "{}".to_owned(),
        };
        assert!(validate_create_request(&valid).is_ok());
    }

    #[test]
    fn download_headers_describe_an_attachment() {
        let headers = download_headers("report-scan-42.json", 1337);

        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=report-scan-42.json"
        );
        assert_eq!(headers[header::CONTENT_LENGTH], "1337");
    }

    #[test]
    fn create_request_uses_camel_case_fields() {
        let request: CreateReportRequest =
            serde_json::from_str(r#"{"scanId":"scan-42","content":"{\"findings\":[]}"}"#)
                .unwrap();

        assert_eq!(request.scan_id, "scan-42");
        assert_eq!(request.content, r#"{"findings":[]}"#);
    }

    #[test]
    fn routes_cover_all_report_endpoints() {
        let (_, api) = routes().split_for_parts();

        let paths = &api.paths.paths;
        assert!(paths.contains_key("/reports"));
        assert!(paths.contains_key("/reports/{id}"));
        assert!(paths.contains_key("/reports/{id}/download"));
    }
}
