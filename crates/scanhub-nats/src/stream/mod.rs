//! JetStream streams for report lifecycle events.
//!
//! Stream topology is declared through the [`EventStream`] trait: each stream
//! type carries its name, subject, retention, and consumer name as associated
//! constants, and publishers are generic over those types.

// Base types
mod event_pub;
mod event_stream;
mod stream_pub;

// Report events
mod report_event;

pub use event_pub::EventPublisher;
pub use event_stream::{EventStream, ReportStream};
pub use report_event::{ReportEvent, ReportEventPublisher};
pub use stream_pub::StreamPublisher;
