//! Report model for PostgreSQL database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::reports;

/// A stored scan report.
///
/// Each row records where a report's content lives in object storage and
/// which scan produced it. Rows are immutable once written; the identifier
/// and creation timestamp are assigned by the database on insert.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = reports)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Report {
    /// Unique report identifier.
    pub id: Uuid,
    /// Identifier of the scan that produced this report.
    pub scan_id: String,
    /// Object storage key holding the report content.
    pub object_key: String,
    /// Timestamp when the report was created.
    pub created_at: Timestamp,
}

/// Data for creating a new report.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = reports)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewReport {
    /// Scan identifier (required).
    pub scan_id: String,
    /// Object storage key (required).
    pub object_key: String,
}

impl Report {
    /// Returns the creation time as a [`jiff::Timestamp`].
    pub fn created_at(&self) -> jiff::Timestamp {
        self.created_at.into()
    }
}
