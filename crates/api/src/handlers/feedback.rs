//! Handlers for the `/feedback` resource.
//!
//! Feedback is triaged pending -> reviewed -> archived, forward only.
//! Admins can reply to the submitter by email when SMTP is configured.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use plaza_core::error::CoreError;
use plaza_core::feedback as feedback_rules;
use plaza_core::types::DbId;
use plaza_db::models::feedback::{CreateFeedback, Feedback};
use plaza_db::repositories::FeedbackRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /feedback/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Request body for `POST /feedback/{id}/respond`.
#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    pub subject: String,
    pub message: String,
}

/// GET /api/v1/feedback
pub async fn list(_auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let feedback = FeedbackRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: feedback }))
}

/// POST /api/v1/feedback
///
/// Public endpoint backing the community contact form.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFeedback>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let feedback = FeedbackRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: feedback })))
}

/// PUT /api/v1/feedback/{id}/status
///
/// Move feedback forward in the triage order. Backward moves are a 409.
pub async fn update_status(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<impl IntoResponse> {
    feedback_rules::validate_status(&input.status)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let feedback = ensure_feedback_exists(&state.pool, id).await?;

    if !feedback_rules::can_transition(&feedback.status, &input.status) {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Feedback status cannot move from '{}' to '{}'",
            feedback.status, input.status
        ))));
    }

    let updated = FeedbackRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Feedback",
            id,
        }))?;

    tracing::info!(
        user_id = auth.user_id,
        feedback_id = id,
        status = %updated.status,
        "Feedback status updated"
    );

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/feedback/{id}
pub async fn delete(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = FeedbackRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Feedback",
            id,
        }))
    }
}

/// POST /api/v1/feedback/{id}/respond
///
/// Email a reply to the feedback submitter. Requires SMTP configuration;
/// the feedback row itself is not modified.
pub async fn respond(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RespondRequest>,
) -> AppResult<StatusCode> {
    let mailer = state.mailer.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable("Email responses are not configured".into())
    })?;

    let feedback = ensure_feedback_exists(&state.pool, id).await?;

    mailer
        .send(&feedback.email, &input.subject, &input.message)
        .await?;

    tracing::info!(
        user_id = auth.user_id,
        feedback_id = id,
        "Feedback response sent"
    );

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a feedback row exists, returning it.
async fn ensure_feedback_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Feedback> {
    FeedbackRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Feedback",
            id,
        }))
}
