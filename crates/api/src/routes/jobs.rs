//! Route definitions for the `/jobs` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::jobs;
use crate::state::AppState;

/// Routes mounted at `/jobs`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// POST   /{id}/feature  -> toggle_feature
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(jobs::list).post(jobs::create))
        .route(
            "/{id}",
            get(jobs::get_by_id).put(jobs::update).delete(jobs::delete),
        )
        .route("/{id}/feature", post(jobs::toggle_feature))
}
