//! Job listing entity model and DTOs.

use plaza_core::types::{CalendarDate, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `jobs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Job {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub salary_range: Option<String>,
    pub deadline: CalendarDate,
    pub requirements: String,
    pub link: Option<String>,
    pub featured: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new job listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateJob {
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub salary_range: Option<String>,
    pub deadline: CalendarDate,
    pub requirements: String,
    pub link: Option<String>,
}

/// DTO for updating an existing job listing. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateJob {
    pub title: Option<String>,
    pub description: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub salary_range: Option<String>,
    pub deadline: Option<CalendarDate>,
    pub requirements: Option<String>,
    pub link: Option<String>,
}
