//! Database migration management.
//!
//! Migrations are embedded into the binary at compile time and applied
//! through the [`PgClientExt`] extension trait. Running migrations is
//! idempotent; already-applied versions are skipped.

use std::time::{Duration, Instant};

use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::MigrationHarness;
use tokio::task::spawn_blocking;

use crate::{MIGRATIONS, PgClient, PgError, PgResult, TRACING_TARGET_MIGRATION};

/// Outcome of a migration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationResult {
    /// Total duration of the migration run
    pub duration: Duration,
    /// Migration versions applied during this run, in order
    pub applied_versions: Vec<String>,
}

impl MigrationResult {
    /// Returns whether the run applied no migrations.
    #[inline]
    pub fn is_no_op(&self) -> bool {
        self.applied_versions.is_empty()
    }

    /// Returns the last applied migration version, if any.
    pub fn last_applied_version(&self) -> Option<&str> {
        self.applied_versions.last().map(|s| s.as_str())
    }
}

/// Runs all pending migrations on the database.
///
/// The migration harness is synchronous, so the run is moved onto a blocking
/// task while the async runtime stays responsive.
#[tracing::instrument(skip(pg), target = TRACING_TARGET_MIGRATION)]
pub async fn run_pending_migrations(pg: &PgClient) -> PgResult<MigrationResult> {
    tracing::info!(
        target: TRACING_TARGET_MIGRATION,
        "Applying pending database migrations"
    );

    let start = Instant::now();
    let conn = pg.get_pooled_connection().await?;
    let mut conn: AsyncConnectionWrapper<_> = conn.into();

    let results = spawn_blocking(move || {
        conn.run_pending_migrations(MIGRATIONS).map(|versions| {
            versions
                .into_iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
        })
    })
    .await
    .map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET_MIGRATION,
            error = %err,
            "Migration task panicked, join error occurred"
        );
        PgError::Migration(err.into())
    })?;

    let duration = start.elapsed();
    let applied_versions = results.map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET_MIGRATION,
            duration = ?duration,
            error = &err,
            "Database migration failed"
        );
        PgError::Migration(err)
    })?;

    if applied_versions.is_empty() {
        tracing::info!(
            target: TRACING_TARGET_MIGRATION,
            duration = ?duration,
            "Database schema is already up to date"
        );
    } else {
        tracing::info!(
            target: TRACING_TARGET_MIGRATION,
            duration = ?duration,
            migrations = ?applied_versions,
            "Database migrations applied"
        );
    }

    Ok(MigrationResult {
        duration,
        applied_versions,
    })
}

/// Extension trait providing migration functionality for [`PgClient`].
pub trait PgClientExt {
    /// Runs all pending database migrations.
    ///
    /// This will apply any unapplied migrations to bring the database schema
    /// up to date. It is safe to call this method multiple times.
    ///
    /// # Errors
    ///
    /// Returns an error if any migration fails to apply or if there are
    /// connectivity issues with the database.
    fn run_pending_migrations(&self) -> impl Future<Output = PgResult<MigrationResult>>;
}

impl PgClientExt for PgClient {
    async fn run_pending_migrations(&self) -> PgResult<MigrationResult> {
        run_pending_migrations(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_run_is_no_op() {
        let result = MigrationResult {
            duration: Duration::from_millis(5),
            applied_versions: vec![],
        };
        assert!(result.is_no_op());
        assert_eq!(result.last_applied_version(), None);
    }

    #[test]
    fn applied_versions_are_reported_in_order() {
        let result = MigrationResult {
            duration: Duration::from_millis(120),
            applied_versions: vec![
                "2026-07-30-142000".to_string(),
                "2026-08-02-091500".to_string(),
            ],
        };
        assert!(!result.is_no_op());
        assert_eq!(result.last_applied_version(), Some("2026-08-02-091500"));
    }
}
