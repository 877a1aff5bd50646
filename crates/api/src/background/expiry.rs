//! Periodic deletion of published records whose date has passed.
//!
//! Events expire by `date` and opportunities by `deadline`; both are
//! compared as calendar dates, strictly before today, so records dated
//! today stay live. Runs on a fixed interval using `tokio::time::interval`
//! (the first tick fires immediately, so one sweep happens at startup).

use std::time::Duration;

use chrono::Utc;
use plaza_core::expiry::expired_ids;
use plaza_core::types::CalendarDate;
use plaza_db::repositories::{EventRepo, OpportunityRepo};
use serde::Serialize;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

/// How often the sweep runs.
const SWEEP_INTERVAL: Duration = Duration::from_secs(3600); // 1 hour

/// Rows removed by one sweep pass, per table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SweepOutcome {
    pub events_deleted: u64,
    pub opportunities_deleted: u64,
}

/// Run the expiry sweep loop until `cancel` is triggered.
pub async fn run(pool: PgPool, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = SWEEP_INTERVAL.as_secs(),
        "Expiry sweep job started"
    );

    let mut interval = tokio::time::interval(SWEEP_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Expiry sweep job stopping");
                break;
            }
            _ = interval.tick() => {
                match sweep_all(&pool).await {
                    Ok(outcome) => {
                        let total = outcome.events_deleted + outcome.opportunities_deleted;
                        if total > 0 {
                            tracing::info!(
                                events = outcome.events_deleted,
                                opportunities = outcome.opportunities_deleted,
                                "Expiry sweep: removed past records"
                            );
                        } else {
                            tracing::debug!("Expiry sweep: nothing to remove");
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Expiry sweep failed");
                    }
                }
            }
        }
    }
}

/// Sweep every expiring table once, using today's date as the cutoff.
pub async fn sweep_all(pool: &PgPool) -> Result<SweepOutcome, sqlx::Error> {
    let today = Utc::now().date_naive();
    Ok(SweepOutcome {
        events_deleted: sweep_events(pool, today).await?,
        opportunities_deleted: sweep_opportunities(pool, today).await?,
    })
}

/// Delete events dated strictly before `today`. Returns the removed count.
///
/// When nothing has expired no delete statement is issued, so re-running
/// with an unchanged table is a no-op.
pub async fn sweep_events(pool: &PgPool, today: CalendarDate) -> Result<u64, sqlx::Error> {
    let rows = EventRepo::list_dates(pool).await?;
    let expired = expired_ids(&rows, today);
    if expired.is_empty() {
        return Ok(0);
    }
    EventRepo::delete_by_ids(pool, &expired).await
}

/// Delete opportunities with a deadline strictly before `today`. Returns
/// the removed count.
pub async fn sweep_opportunities(pool: &PgPool, today: CalendarDate) -> Result<u64, sqlx::Error> {
    let rows = OpportunityRepo::list_deadlines(pool).await?;
    let expired = expired_ids(&rows, today);
    if expired.is_empty() {
        return Ok(0);
    }
    OpportunityRepo::delete_by_ids(pool, &expired).await
}
