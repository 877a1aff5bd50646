pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod events;
pub mod feedback;
pub mod health;
pub mod jobs;
pub mod newsletter;
pub mod opportunities;
pub mod resources;
pub mod submissions;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                         login (public)
/// /auth/refresh                       refresh (public)
/// /auth/logout                        logout (requires auth)
///
/// /admin/users                        list, create (admin only)
/// /admin/maintenance/sweep            run expiry sweep now (admin only)
///
/// /dashboard/stats                    counts + pending queue (GET)
///
/// /events                             list, create
/// /events/{id}                        get, update, delete
/// /events/{id}/feature                toggle featured (POST)
///
/// /opportunities                      list, create
/// /opportunities/{id}                 get, update, delete
/// /opportunities/{id}/feature         toggle featured (POST)
///
/// /jobs                               list, create
/// /jobs/{id}                          get, update, delete
/// /jobs/{id}/feature                  toggle featured (POST)
///
/// /resources                          list, create
/// /resources/{id}                     get, update, delete
/// /resources/{id}/feature             toggle featured (POST)
///
/// /submissions                        list (?type=&status=), create (public)
/// /submissions/{id}                   get
/// /submissions/{id}/approve           publish + remove (POST)
/// /submissions/{id}/reject            mark rejected (POST)
///
/// /feedback                           list, create (public)
/// /feedback/{id}                      delete
/// /feedback/{id}/status               forward-only status update (PUT)
/// /feedback/{id}/respond              email the submitter (POST)
///
/// /newsletter-signups                 list, create (public)
/// /newsletter-signups/{id}            delete
///
/// /uploads                            upload file (POST, multipart)
/// /uploads/{key}                      delete object (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, refresh, logout).
        .nest("/auth", auth::router())
        // Admin routes (user management + maintenance).
        .nest("/admin", admin::router())
        // Dashboard widget data.
        .nest("/dashboard", dashboard::router())
        // Published content.
        .nest("/events", events::router())
        .nest("/opportunities", opportunities::router())
        .nest("/jobs", jobs::router())
        .nest("/resources", resources::router())
        // Review queue.
        .nest("/submissions", submissions::router())
        // Feedback triage.
        .nest("/feedback", feedback::router())
        // Newsletter signups.
        .nest("/newsletter-signups", newsletter::router())
        // File uploads.
        .nest("/uploads", uploads::router())
}
