//! Report response types.

use jiff::Timestamp;
use scanhub_postgres::model;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A stored scan report.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    /// Identifier assigned by the metadata store.
    pub id: Uuid,
    /// Identifier of the scan this report belongs to.
    pub scan_id: String,
    /// Object storage key holding the report content.
    pub key: String,
    /// Timestamp when the report was ingested.
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
}

impl From<model::Report> for ReportResponse {
    fn from(report: model::Report) -> Self {
        Self {
            created_at: report.created_at(),

            id: report.id,
            scan_id: report.scan_id,
            key: report.object_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_fields() {
        let response = ReportResponse {
            id: Uuid::nil(),
            scan_id: "scan-42".to_owned(),
            key: "report-scan-42.json".to_owned(),
            created_at: Timestamp::UNIX_EPOCH,
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["scanId"], "scan-42");
        assert_eq!(json["key"], "report-scan-42.json");
        assert_eq!(json["createdAt"], "1970-01-01T00:00:00Z");
    }
}
