//! Route definitions for the `/newsletter-signups` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::newsletter;
use crate::state::AppState;

/// Routes mounted at `/newsletter-signups`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create (public signup form)
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(newsletter::list).post(newsletter::create))
        .route("/{id}", delete(newsletter::delete))
}
