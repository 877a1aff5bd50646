//! Route definitions for the `/uploads` resource.

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Routes mounted at `/uploads`.
///
/// ```text
/// POST   /         -> upload (multipart, ?folder=)
/// DELETE /{*key}   -> delete object by key
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(uploads::upload))
        .route("/{*key}", delete(uploads::delete))
}
