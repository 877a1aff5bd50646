//! Route definitions for the `/opportunities` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::opportunities;
use crate::state::AppState;

/// Routes mounted at `/opportunities`.
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
        .route("/", get(opportunities::list).post(opportunities::create))
        .route(
            "/{id}",
            get(opportunities::get_by_id)
                .put(opportunities::update)
                .delete(opportunities::delete),
        )
        .route("/{id}/feature", post(opportunities::toggle_feature))
}
