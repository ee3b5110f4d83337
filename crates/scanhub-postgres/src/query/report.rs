//! Report repository for stored scan reports.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{NewReport, Report};
use crate::{PgClient, PgError, PgResult, schema};

/// Repository for report database operations.
///
/// Reports are append-only: they are inserted when a scan completes and
/// looked up by identifier afterwards. There are no update operations.
pub trait ReportRepository {
    /// Creates a new report record.
    ///
    /// The returned row carries the database-assigned identifier and
    /// creation timestamp.
    fn create_report(&self, new_report: NewReport)
    -> impl Future<Output = PgResult<Report>> + Send;

    /// Finds a report by its unique identifier.
    fn find_report_by_id(
        &self,
        report_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Report>>> + Send;
}

impl ReportRepository for PgClient {
    async fn create_report(&self, new_report: NewReport) -> PgResult<Report> {
        let mut conn = self.get_connection().await?;

        use schema::reports;

        let report = diesel::insert_into(reports::table)
            .values(&new_report)
            .returning(Report::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(PgError::from)?;

        Ok(report)
    }

    async fn find_report_by_id(&self, report_id: Uuid) -> PgResult<Option<Report>> {
        let mut conn = self.get_connection().await?;

        use schema::reports::{self, dsl};

        let report = reports::table
            .filter(dsl::id.eq(report_id))
            .select(Report::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(report)
    }
}
