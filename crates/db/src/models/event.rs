//! Published event entity model and DTOs.

use plaza_core::types::{CalendarDate, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub date: CalendarDate,
    pub time: String,
    pub location: String,
    pub location_type: String,
    pub is_free: bool,
    pub link: Option<String>,
    pub flyer_url: Option<String>,
    pub featured: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub description: String,
    pub date: CalendarDate,
    pub time: String,
    pub location: String,
    pub location_type: String,
    /// Defaults to `false` if omitted.
    pub is_free: Option<bool>,
    pub link: Option<String>,
    pub flyer_url: Option<String>,
}

/// DTO for updating an existing event. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<CalendarDate>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub location_type: Option<String>,
    pub is_free: Option<bool>,
    pub link: Option<String>,
    pub flyer_url: Option<String>,
}
