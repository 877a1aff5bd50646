//! Aggregate counts for the admin dashboard.

use serde::Serialize;

/// Exact row counts per published table plus the pending review queue.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardCounts {
    pub events: i64,
    pub opportunities: i64,
    pub jobs: i64,
    pub resources: i64,
    pub pending_submissions: i64,
}
