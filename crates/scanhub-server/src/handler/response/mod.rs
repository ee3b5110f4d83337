//! Response types for HTTP handlers.

mod error_response;
mod monitors;
mod reports;

pub use error_response::*;
pub use monitors::*;
pub use reports::*;
