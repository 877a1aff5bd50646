//! HTTP-level integration tests for the submission review queue.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get_auth, post_auth, post_json, seed_user};
use plaza_core::review::STATUS_PENDING;
use plaza_db::models::submission::CreateSubmission;
use plaza_db::repositories::{EventRepo, SubmissionRepo};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn event_submission_body() -> serde_json::Value {
    json!({
        "submitter_name": "Ada",
        "submitter_email": "ada@example.org",
        "title": "T",
        "description": "A community event",
        "submission_type": "event",
        "date": "2025-01-01",
        "time": "10:00",
        "location": "Town Hall",
        "location_type": "in-person",
        "is_free": true
    })
}

// ---------------------------------------------------------------------------
// Test: submit (public) -> approve -> published event, submission gone
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_submit_then_approve(pool: PgPool) {
    let token = seed_user(&pool, "admin@example.org", "admin").await;

    // The public form posts without a token.
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/submissions",
        event_submission_body(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["status"], "pending");

    // Approve as an authenticated reviewer.
    let response = post_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/submissions/{id}/approve"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let approved = body_json(response).await;
    assert_eq!(approved["data"]["kind"], "event");
    assert_eq!(approved["data"]["title"], "T");
    assert_eq!(approved["data"]["date"], "2025-01-01");

    // Exactly one published event; the submission no longer exists.
    let events = EventRepo::list(&pool).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "T");

    let response = get_auth(
        build_test_app(pool),
        &format!("/api/v1/submissions/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: reject retains the submission; re-review is a conflict
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reject_then_re_review_conflicts(pool: PgPool) {
    let token = seed_user(&pool, "admin@example.org", "admin").await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/submissions",
        event_submission_body(),
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = post_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/submissions/{id}/reject"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "rejected");

    // The row is still fetchable (retained for the rejected list).
    let response = get_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/submissions/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // A second decision on a terminal submission is a 409.
    let response = post_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/submissions/{id}/approve"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Nothing got published along the way.
    assert!(EventRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: approving an incomplete submission fails and changes nothing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_approve_incomplete_submission_fails_clean(pool: PgPool) {
    let token = seed_user(&pool, "admin@example.org", "admin").await;

    // The public endpoint would reject this, so seed through the
    // repository the way a legacy form bug would have.
    let submission = SubmissionRepo::create(
        &pool,
        &CreateSubmission {
            submitter_name: "Ada".to_string(),
            submitter_email: "ada@example.org".to_string(),
            title: "No date".to_string(),
            description: "Missing fields".to_string(),
            submission_type: "event".to_string(),
            date: None,
            time: None,
            location: None,
            location_type: None,
            is_free: None,
            deadline: None,
            eligibility: None,
            category: None,
            link: None,
            flyer_url: None,
        },
    )
    .await
    .unwrap();

    let response = post_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/submissions/{}/approve", submission.id),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    // The submission is unchanged and nothing was published.
    let reloaded = SubmissionRepo::find_by_id(&pool, submission.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.status, STATUS_PENDING);
    assert!(EventRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: the public form rejects malformed submissions up front
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_public_submission_validation(pool: PgPool) {
    // Unknown type.
    let mut body = event_submission_body();
    body["submission_type"] = json!("job");
    let response = post_json(build_test_app(pool.clone()), "/api/v1/submissions", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Missing event fields.
    let mut body = event_submission_body();
    body.as_object_mut().unwrap().remove("date");
    let response = post_json(build_test_app(pool.clone()), "/api/v1/submissions", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Bad submitter email.
    let mut body = event_submission_body();
    body["submitter_email"] = json!("not-an-email");
    let response = post_json(build_test_app(pool.clone()), "/api/v1/submissions", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing landed in the table.
    assert!(SubmissionRepo::list(&pool, None, None).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: listing filters by status for the review tabs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_pending_submissions(pool: PgPool) {
    let token = seed_user(&pool, "admin@example.org", "admin").await;

    post_json(
        build_test_app(pool.clone()),
        "/api/v1/submissions",
        event_submission_body(),
    )
    .await;

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/submissions?type=event&status=pending",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);

    // An invalid filter value is a 400, not an empty list.
    let response = get_auth(
        build_test_app(pool),
        "/api/v1/submissions?status=bogus",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
