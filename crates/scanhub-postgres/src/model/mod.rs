//! Database models for stored scan reports.
//!
//! This module contains Diesel model definitions for the `reports` table,
//! including structs for querying and inserting records.

mod report;

pub use report::{NewReport, Report};
