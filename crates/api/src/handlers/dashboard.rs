//! Handlers for the admin dashboard.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use plaza_core::review::STATUS_PENDING;
use plaza_db::models::dashboard::DashboardCounts;
use plaza_db::models::submission::Submission;
use plaza_db::repositories::{DashboardRepo, SubmissionRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// How many pending submissions the dashboard previews.
const RECENT_SUBMISSIONS_LIMIT: usize = 10;

/// Dashboard payload: exact per-table counts plus the newest pending
/// submissions.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub counts: DashboardCounts,
    pub recent_submissions: Vec<Submission>,
}

/// GET /api/v1/dashboard/stats
pub async fn stats(_auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let counts = DashboardRepo::counts(&state.pool).await?;

    let mut recent_submissions =
        SubmissionRepo::list(&state.pool, None, Some(STATUS_PENDING)).await?;
    recent_submissions.truncate(RECENT_SUBMISSIONS_LIMIT);

    Ok(Json(DataResponse {
        data: DashboardStats {
            counts,
            recent_submissions,
        },
    }))
}
