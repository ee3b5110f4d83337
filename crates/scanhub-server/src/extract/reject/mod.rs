//! Request extractors with detailed rejection handling.
//!
//! The extractors here delegate to their Axum counterparts and convert
//! rejections into [`Error`] values with actionable context instead of
//! plain-text bodies.
//!
//! [`Error`]: crate::handler::Error

pub mod enhanced_json;
pub mod enhanced_path;

pub use self::enhanced_json::Json;
pub use self::enhanced_path::Path;
