//! Route definitions for the `/submissions` review queue.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// Routes mounted at `/submissions`.
///
/// ```text
/// GET  /               -> list (?type=&status=)
/// POST /               -> create (public submission form)
/// GET  /{id}           -> get_by_id
/// POST /{id}/approve   -> approve (publish + remove)
/// POST /{id}/reject    -> reject (retain with status)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(submissions::list).post(submissions::create))
        .route("/{id}", get(submissions::get_by_id))
        .route("/{id}/approve", post(submissions::approve))
        .route("/{id}/reject", post(submissions::reject))
}
