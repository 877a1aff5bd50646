//! Route definitions for the `/feedback` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// Routes mounted at `/feedback`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create (public contact form)
/// DELETE /{id}           -> delete
/// PUT    /{id}/status    -> update_status (forward only)
/// POST   /{id}/respond   -> respond (email the submitter)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(feedback::list).post(feedback::create))
        .route("/{id}", delete(feedback::delete))
        .route("/{id}/status", put(feedback::update_status))
        .route("/{id}/respond", post(feedback::respond))
}
