//! HTTP-level integration tests for the `/auth` endpoints.
//!
//! Users are seeded through the repository layer, then exercised through
//! the login / refresh / logout flow.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, post_auth, post_json, seed_user, TEST_PASSWORD};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: login with valid credentials returns tokens
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success(pool: PgPool) {
    seed_user(&pool, "admin@example.org", "admin").await;

    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "email": "admin@example.org", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["access_token"].is_string());
    assert!(body["refresh_token"].is_string());
    assert_eq!(body["user"]["email"], "admin@example.org");
    assert_eq!(body["user"]["role"], "admin");
}

// ---------------------------------------------------------------------------
// Test: wrong password is 401 and does not leak which field was wrong
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    seed_user(&pool, "admin@example.org", "admin").await;

    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "email": "admin@example.org", "password": "wrong" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["code"], "UNAUTHORIZED");
}

// ---------------------------------------------------------------------------
// Test: repeated failures lock the account and surface as 429
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_lockout_after_failed_attempts(pool: PgPool) {
    seed_user(&pool, "admin@example.org", "admin").await;

    // Five consecutive failures trip the lock.
    for _ in 0..5 {
        let app = build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/v1/auth/login",
            json!({ "email": "admin@example.org", "password": "wrong" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // Even the correct password is throttled while locked.
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "email": "admin@example.org", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let body = body_json(response).await;
    assert_eq!(body["code"], "RATE_LIMITED");
}

// ---------------------------------------------------------------------------
// Test: refresh rotates the token
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_refresh_rotates_token(pool: PgPool) {
    seed_user(&pool, "admin@example.org", "admin").await;

    let login = post_json(
        build_test_app(pool.clone()),
        "/api/v1/auth/login",
        json!({ "email": "admin@example.org", "password": TEST_PASSWORD }),
    )
    .await;
    let login_body = body_json(login).await;
    let refresh_token = login_body["refresh_token"].as_str().unwrap().to_string();

    // First refresh succeeds and hands back a new refresh token.
    let refreshed = post_json(
        build_test_app(pool.clone()),
        "/api/v1/auth/refresh",
        json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(refreshed.status(), StatusCode::OK);
    let refreshed_body = body_json(refreshed).await;
    assert_ne!(refreshed_body["refresh_token"], login_body["refresh_token"]);

    // The old refresh token was revoked by rotation.
    let replayed = post_json(
        build_test_app(pool),
        "/api/v1/auth/refresh",
        json!({ "refresh_token": login_body["refresh_token"] }),
    )
    .await;
    assert_eq!(replayed.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Test: logout requires auth; protected routes reject anonymous calls
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_protected_routes_require_auth(pool: PgPool) {
    let token = seed_user(&pool, "admin@example.org", "admin").await;

    // Anonymous logout is rejected.
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/auth/logout",
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Authenticated logout succeeds.
    let response = post_auth(build_test_app(pool.clone()), "/api/v1/auth/logout", &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // An entity listing without a token is rejected too.
    let response = common::get(build_test_app(pool), "/api/v1/events").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Test: admin-only routes reject editors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_routes_reject_editor(pool: PgPool) {
    let editor_token = seed_user(&pool, "editor@example.org", "editor").await;

    let response = common::get_auth(
        build_test_app(pool),
        "/api/v1/admin/users",
        &editor_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
