//! Database query repositories for stored reports.
//!
//! This module contains repository implementations that provide high-level
//! database operations on top of the connection pool, encapsulating the
//! Diesel query plumbing behind type-safe interfaces.

pub mod report;

pub use report::ReportRepository;
