//! Event stream configuration for NATS JetStream.

use std::time::Duration;

/// Marker trait for event streams.
///
/// This trait defines the configuration for a NATS JetStream stream.
pub trait EventStream: Clone + Send + Sync + 'static {
    /// Stream name used in NATS JetStream.
    const NAME: &'static str;

    /// Subject for publishing/subscribing to this stream.
    const SUBJECT: &'static str;

    /// Maximum age for messages in this stream.
    /// Returns `None` for streams where messages should not expire.
    const MAX_AGE: Option<Duration>;

    /// Default consumer name for this stream.
    const CONSUMER_NAME: &'static str;
}

/// Stream for report lifecycle events.
///
/// Messages never expire; downstream workers consume at their own pace and
/// a worker that was offline can still catch up on older reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReportStream;

impl EventStream for ReportStream {
    const CONSUMER_NAME: &'static str = "report-worker";
    const MAX_AGE: Option<Duration> = None;
    const NAME: &'static str = "REPORT_EVENTS";
    const SUBJECT: &'static str = "report_events";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_stream_topology() {
        assert_eq!(ReportStream::NAME, "REPORT_EVENTS");
        assert_eq!(ReportStream::SUBJECT, "report_events");
        assert_eq!(ReportStream::MAX_AGE, None);
        assert_eq!(ReportStream::CONSUMER_NAME, "report-worker");
    }
}
