//! Report lifecycle events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::event_pub::EventPublisher;
use super::event_stream::ReportStream;

/// Event emitted after a report has been stored.
///
/// Downstream workers consume these to run follow-up processing on the
/// stored report. The payload carries identifiers only; the report content
/// itself stays in object storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEvent {
    /// Identifier of the stored report.
    pub report_id: Uuid,
    /// Identifier of the scan that produced the report.
    pub scan_id: String,
}

/// Publisher for report lifecycle events.
pub type ReportEventPublisher = EventPublisher<ReportEvent, ReportStream>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_fields() {
        let event = ReportEvent {
            report_id: Uuid::nil(),
            scan_id: "scan-42".to_string(),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "reportId": "00000000-0000-0000-0000-000000000000",
                "scanId": "scan-42",
            })
        );
    }

    #[test]
    fn deserializes_from_camel_case_payload() {
        let payload = r#"{"reportId":"6f2f3f1e-8a50-4f6e-9f4e-2c1d0a9b8c7d","scanId":"scan-7"}"#;
        let event: ReportEvent = serde_json::from_str(payload).unwrap();

        assert_eq!(event.scan_id, "scan-7");
        assert_eq!(
            event.report_id.to_string(),
            "6f2f3f1e-8a50-4f6e-9f4e-2c1d0a9b8c7d"
        );
    }
}
