//! Route definitions for admin-only endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{maintenance, users};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET  /users              -> list users
/// POST /users              -> create user
/// POST /maintenance/sweep  -> run expiry sweep now
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list).post(users::create))
        .route("/maintenance/sweep", post(maintenance::run_sweep))
}
