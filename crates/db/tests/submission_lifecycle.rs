//! Integration tests for the submission review lifecycle.
//!
//! Exercises the repository layer against a real database:
//! - Approval moves a submission into its published table atomically
//! - Validation failures leave the submission untouched
//! - Rejection retains the row with its terminal status
//! - A concurrently-removed submission cannot be double-published

use chrono::NaiveDate;
use plaza_core::review::{STATUS_PENDING, STATUS_REJECTED, TYPE_EVENT, TYPE_OPPORTUNITY};
use plaza_db::models::submission::{ApprovedRecord, CreateSubmission};
use plaza_db::repositories::{EventRepo, OpportunityRepo, SubmissionRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn event_submission(title: &str) -> CreateSubmission {
    CreateSubmission {
        submitter_name: "Ada".to_string(),
        submitter_email: "ada@example.org".to_string(),
        title: title.to_string(),
        description: "A community gathering".to_string(),
        submission_type: TYPE_EVENT.to_string(),
        date: Some(date(2025, 1, 1)),
        time: Some("10:00".to_string()),
        location: Some("Town Hall".to_string()),
        location_type: Some("in-person".to_string()),
        is_free: Some(true),
        deadline: None,
        eligibility: None,
        category: None,
        link: Some("https://example.org/event".to_string()),
        flyer_url: None,
    }
}

fn opportunity_submission(title: &str) -> CreateSubmission {
    CreateSubmission {
        submitter_name: "Grace".to_string(),
        submitter_email: "grace@example.org".to_string(),
        title: title.to_string(),
        description: "A grant for local artists".to_string(),
        submission_type: TYPE_OPPORTUNITY.to_string(),
        date: None,
        time: None,
        location: None,
        location_type: None,
        is_free: Some(false),
        deadline: Some(date(2025, 3, 15)),
        eligibility: Some("Local artists".to_string()),
        category: Some("grant".to_string()),
        link: None,
        flyer_url: None,
    }
}

// ---------------------------------------------------------------------------
// Test: approving an event submission publishes and removes it
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_approve_event_submission(pool: PgPool) {
    let submission = SubmissionRepo::create(&pool, &event_submission("T"))
        .await
        .unwrap();
    assert_eq!(submission.status, STATUS_PENDING);

    let details = submission.details().unwrap();
    let record = SubmissionRepo::publish(&pool, &submission, &details)
        .await
        .unwrap();

    // The published event carries the mapped fields.
    let event = match record {
        ApprovedRecord::Event(event) => event,
        other => panic!("expected an event, got {other:?}"),
    };
    assert_eq!(event.title, "T");
    assert_eq!(event.date, date(2025, 1, 1));
    assert_eq!(event.time, "10:00");
    assert_eq!(event.location, "Town Hall");
    assert!(event.is_free);
    assert!(!event.featured, "new records start unfeatured");

    // Exactly one event exists and the submission row is gone.
    assert_eq!(EventRepo::list(&pool).await.unwrap().len(), 1);
    assert!(SubmissionRepo::find_by_id(&pool, submission.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: approving an opportunity submission targets the right table
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_approve_opportunity_submission(pool: PgPool) {
    let submission = SubmissionRepo::create(&pool, &opportunity_submission("Artist Grant"))
        .await
        .unwrap();

    let details = submission.details().unwrap();
    let record = SubmissionRepo::publish(&pool, &submission, &details)
        .await
        .unwrap();

    let opportunity = match record {
        ApprovedRecord::Opportunity(opportunity) => opportunity,
        other => panic!("expected an opportunity, got {other:?}"),
    };
    assert_eq!(opportunity.title, "Artist Grant");
    assert_eq!(opportunity.deadline, date(2025, 3, 15));
    assert_eq!(opportunity.eligibility, "Local artists");
    assert_eq!(opportunity.category, "grant");

    assert_eq!(OpportunityRepo::list(&pool).await.unwrap().len(), 1);
    assert!(EventRepo::list(&pool).await.unwrap().is_empty());
    assert!(SubmissionRepo::find_by_id(&pool, submission.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: missing required fields fail validation before anything is written
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_incomplete_submission_fails_validation(pool: PgPool) {
    let mut input = event_submission("Broken");
    input.date = None;
    input.time = None;
    let submission = SubmissionRepo::create(&pool, &input).await.unwrap();

    let result = submission.details();
    assert!(result.is_err(), "missing date must fail typed access");

    // Nothing was published and the submission is still pending.
    assert!(EventRepo::list(&pool).await.unwrap().is_empty());
    let reloaded = SubmissionRepo::find_by_id(&pool, submission.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.status, STATUS_PENDING);
}

// ---------------------------------------------------------------------------
// Test: publishing a vanished submission rolls back the insert
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_publish_vanished_submission_rolls_back(pool: PgPool) {
    let submission = SubmissionRepo::create(&pool, &event_submission("Raced"))
        .await
        .unwrap();
    let details = submission.details().unwrap();

    // Another reviewer removes the row first.
    assert!(SubmissionRepo::delete(&pool, submission.id).await.unwrap());

    let result = SubmissionRepo::publish(&pool, &submission, &details).await;
    assert!(matches!(result, Err(sqlx::Error::RowNotFound)));

    // The transactional insert must not have survived the rollback.
    assert!(EventRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: rejection retains the row with its terminal status
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reject_retains_submission(pool: PgPool) {
    let submission = SubmissionRepo::create(&pool, &opportunity_submission("Declined"))
        .await
        .unwrap();

    let updated = SubmissionRepo::update_status(&pool, submission.id, STATUS_REJECTED)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, STATUS_REJECTED);

    // The row is still there, and it shows up in a rejected-only listing.
    let rejected = SubmissionRepo::list(&pool, None, Some(STATUS_REJECTED))
        .await
        .unwrap();
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].id, submission.id);

    // Nothing was published.
    assert!(OpportunityRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: listing filters compose
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters_by_type_and_status(pool: PgPool) {
    SubmissionRepo::create(&pool, &event_submission("E1"))
        .await
        .unwrap();
    let opp = SubmissionRepo::create(&pool, &opportunity_submission("O1"))
        .await
        .unwrap();
    SubmissionRepo::update_status(&pool, opp.id, STATUS_REJECTED)
        .await
        .unwrap();

    let pending_events = SubmissionRepo::list(&pool, Some(TYPE_EVENT), Some(STATUS_PENDING))
        .await
        .unwrap();
    assert_eq!(pending_events.len(), 1);
    assert_eq!(pending_events[0].title, "E1");

    let all = SubmissionRepo::list(&pool, None, None).await.unwrap();
    assert_eq!(all.len(), 2);

    assert_eq!(SubmissionRepo::count_pending(&pool).await.unwrap(), 1);
}
