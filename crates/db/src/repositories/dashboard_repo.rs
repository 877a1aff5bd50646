//! Aggregate count queries for the admin dashboard.

use sqlx::PgPool;

use crate::models::dashboard::DashboardCounts;

/// Provides the dashboard's exact-count queries.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Exact row counts per published table plus the pending queue size.
    pub async fn counts(pool: &PgPool) -> Result<DashboardCounts, sqlx::Error> {
        let events: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(pool)
            .await?;
        let opportunities: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM opportunities")
            .fetch_one(pool)
            .await?;
        let jobs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
            .fetch_one(pool)
            .await?;
        let resources: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM resources")
            .fetch_one(pool)
            .await?;
        let pending_submissions: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM submissions WHERE status = 'pending'")
                .fetch_one(pool)
                .await?;

        Ok(DashboardCounts {
            events,
            opportunities,
            jobs,
            resources,
            pending_submissions,
        })
    }
}
