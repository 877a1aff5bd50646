//! Handlers for admin maintenance actions.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::background::expiry;
use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/admin/maintenance/sweep
///
/// Run the expiry sweep immediately instead of waiting for the hourly
/// background pass. Returns the per-table deletion counts.
pub async fn run_sweep(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let outcome = expiry::sweep_all(&state.pool).await?;

    tracing::info!(
        admin_id = admin.user_id,
        events = outcome.events_deleted,
        opportunities = outcome.opportunities_deleted,
        "Manual expiry sweep completed"
    );

    Ok(Json(DataResponse { data: outcome }))
}
