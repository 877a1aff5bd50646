//! Handlers for the `/submissions` review queue.
//!
//! Submissions arrive from the public submission form and wait in
//! `pending`. Approval moves them into their published table atomically;
//! rejection marks the row `rejected` and keeps it.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use plaza_core::error::CoreError;
use plaza_core::review::{self, STATUS_REJECTED};
use plaza_core::types::DbId;
use plaza_db::models::submission::{CreateSubmission, Submission};
use plaza_db::repositories::SubmissionRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the submission listing endpoint.
#[derive(Debug, Deserialize)]
pub struct SubmissionQuery {
    /// Optional type filter (`event` or `opportunity`).
    #[serde(rename = "type")]
    pub submission_type: Option<String>,
    /// Optional status filter (`pending`, `rejected`).
    pub status: Option<String>,
}

/// GET /api/v1/submissions
///
/// List submissions, optionally filtered by type and status, newest first.
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<SubmissionQuery>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref t) = params.submission_type {
        review::validate_submission_type(t).map_err(AppError::BadRequest)?;
    }
    if let Some(ref s) = params.status {
        review::validate_status(s).map_err(AppError::BadRequest)?;
    }

    let submissions = SubmissionRepo::list(
        &state.pool,
        params.submission_type.as_deref(),
        params.status.as_deref(),
    )
    .await?;
    Ok(Json(DataResponse { data: submissions }))
}

/// GET /api/v1/submissions/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let submission = ensure_submission_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: submission }))
}

/// POST /api/v1/submissions
///
/// Public endpoint backing the community submission form. New rows start
/// in `pending` and wait for review.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSubmission>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    review::validate_submission_type(&input.submission_type)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    validate_type_fields(&input)?;

    let submission = SubmissionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        submission_id = submission.id,
        submission_type = %submission.submission_type,
        "Submission received"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: submission })))
}

/// POST /api/v1/submissions/{id}/approve
///
/// Publish a pending submission. The derived record is inserted and the
/// submission row deleted in a single transaction; on any failure the
/// submission stays pending and nothing is published.
pub async fn approve(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let submission = ensure_submission_exists(&state.pool, id).await?;
    ensure_reviewable(&submission)?;

    let details = submission.details().map_err(AppError::Core)?;
    let record = SubmissionRepo::publish(&state.pool, &submission, &details).await?;

    tracing::info!(
        user_id = auth.user_id,
        submission_id = id,
        submission_type = %submission.submission_type,
        "Submission approved and published"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// POST /api/v1/submissions/{id}/reject
///
/// Mark a pending submission as rejected. The row is retained so the
/// rejected list stays reviewable.
pub async fn reject(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let submission = ensure_submission_exists(&state.pool, id).await?;
    ensure_reviewable(&submission)?;

    let updated = SubmissionRepo::update_status(&state.pool, id, STATUS_REJECTED)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id,
        }))?;

    tracing::info!(
        user_id = auth.user_id,
        submission_id = id,
        submission_type = %updated.submission_type,
        "Submission rejected"
    );

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a submission exists, returning the full row.
async fn ensure_submission_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Submission> {
    SubmissionRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id,
        }))
}

/// Reject review actions on submissions that already left `pending`.
fn ensure_reviewable(submission: &Submission) -> AppResult<()> {
    if review::is_reviewable(&submission.status) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Conflict(format!(
            "Submission {} is already {}",
            submission.id, submission.status
        ))))
    }
}

/// Check that the fields the submission's type requires are present, so a
/// form bug surfaces at submit time instead of at approval.
fn validate_type_fields(input: &CreateSubmission) -> AppResult<()> {
    let missing: Vec<&str> = match input.submission_type.as_str() {
        review::TYPE_EVENT => [
            ("date", input.date.is_none()),
            ("time", input.time.is_none()),
            ("location", input.location.is_none()),
            ("location_type", input.location_type.is_none()),
        ]
        .into_iter()
        .filter(|(_, absent)| *absent)
        .map(|(name, _)| name)
        .collect(),
        review::TYPE_OPPORTUNITY => [
            ("deadline", input.deadline.is_none()),
            ("eligibility", input.eligibility.is_none()),
            ("category", input.category.is_none()),
        ]
        .into_iter()
        .filter(|(_, absent)| *absent)
        .map(|(name, _)| name)
        .collect(),
        _ => Vec::new(),
    };

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(format!(
            "{} submission is missing required fields: {}",
            input.submission_type,
            missing.join(", ")
        ))))
    }
}
