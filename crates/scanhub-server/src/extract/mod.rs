//! Enhanced HTTP request extractors with improved error handling.
//!
//! Drop-in replacements for the standard Axum extractors that map
//! rejections onto the handler [`Error`] type, so malformed requests
//! produce the same structured error bodies as every other failure.
//!
//! [`Error`]: crate::handler::Error

pub mod reject;

pub use crate::extract::reject::{Json, Path};
