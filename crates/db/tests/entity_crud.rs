//! Integration tests for published-record CRUD and the feature toggle.

use chrono::NaiveDate;
use plaza_db::models::event::{CreateEvent, UpdateEvent};
use plaza_db::models::job::CreateJob;
use plaza_db::models::resource::CreateResource;
use plaza_db::repositories::{EventRepo, JobRepo, ResourceRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_event(title: &str) -> CreateEvent {
    CreateEvent {
        title: title.to_string(),
        description: "An event".to_string(),
        date: date(2030, 6, 1),
        time: "19:00".to_string(),
        location: "Community Center".to_string(),
        location_type: "in-person".to_string(),
        is_free: None,
        link: None,
        flyer_url: None,
    }
}

fn new_job(title: &str) -> CreateJob {
    CreateJob {
        title: title.to_string(),
        description: "A job".to_string(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        job_type: "full-time".to_string(),
        salary_range: Some("$50k-$70k".to_string()),
        deadline: date(2030, 9, 1),
        requirements: "Experience".to_string(),
        link: None,
    }
}

fn new_resource(title: &str) -> CreateResource {
    CreateResource {
        title: title.to_string(),
        description: "A resource".to_string(),
        category: "guide".to_string(),
        is_premium: None,
        price: None,
        file_url: Some("https://cdn.example.org/guide.pdf".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Test: event create / get / update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_event_crud(pool: PgPool) {
    let event = EventRepo::create(&pool, &new_event("Open Mic")).await.unwrap();
    assert_eq!(event.title, "Open Mic");
    assert!(!event.is_free, "is_free defaults to false");
    assert!(!event.featured, "featured defaults to false");

    let fetched = EventRepo::find_by_id(&pool, event.id).await.unwrap().unwrap();
    assert_eq!(fetched.id, event.id);

    // Partial update: only the named fields change.
    let update = UpdateEvent {
        title: Some("Open Mic Night".to_string()),
        description: None,
        date: None,
        time: Some("20:00".to_string()),
        location: None,
        location_type: None,
        is_free: Some(true),
        link: None,
        flyer_url: None,
    };
    let updated = EventRepo::update(&pool, event.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "Open Mic Night");
    assert_eq!(updated.time, "20:00");
    assert_eq!(updated.location, "Community Center");
    assert!(updated.is_free);

    assert!(EventRepo::delete(&pool, event.id).await.unwrap());
    assert!(EventRepo::find_by_id(&pool, event.id).await.unwrap().is_none());

    // Deleting again reports nothing removed.
    assert!(!EventRepo::delete(&pool, event.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Test: list order is newest-first
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_event_list_newest_first(pool: PgPool) {
    EventRepo::create(&pool, &new_event("First")).await.unwrap();
    EventRepo::create(&pool, &new_event("Second")).await.unwrap();

    let events = EventRepo::list(&pool).await.unwrap();
    assert_eq!(events.len(), 2);
    // created_at ties resolve by insertion order within the same
    // millisecond; compare ids instead which are strictly increasing.
    assert!(events[0].id > events[1].id);
}

// ---------------------------------------------------------------------------
// Test: feature toggle flips exactly once per call
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_toggle_featured_twice_restores_original(pool: PgPool) {
    let event = EventRepo::create(&pool, &new_event("Toggle")).await.unwrap();
    assert!(!event.featured);

    let once = EventRepo::toggle_featured(&pool, event.id)
        .await
        .unwrap()
        .unwrap();
    assert!(once.featured);

    let twice = EventRepo::toggle_featured(&pool, event.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!twice.featured, "two toggles return the original value");

    // Toggling a missing row reports not-found rather than inventing one.
    assert!(EventRepo::toggle_featured(&pool, event.id + 999)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: jobs and resources round out the published tables
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_job_and_resource_crud(pool: PgPool) {
    let job = JobRepo::create(&pool, &new_job("Organizer")).await.unwrap();
    assert_eq!(job.company, "Acme");
    assert_eq!(job.salary_range.as_deref(), Some("$50k-$70k"));

    let toggled = JobRepo::toggle_featured(&pool, job.id).await.unwrap().unwrap();
    assert!(toggled.featured);

    let resource = ResourceRepo::create(&pool, &new_resource("Zine Guide"))
        .await
        .unwrap();
    assert!(!resource.is_premium);
    assert_eq!(resource.price, None);

    assert!(JobRepo::delete(&pool, job.id).await.unwrap());
    assert!(ResourceRepo::delete(&pool, resource.id).await.unwrap());
}
