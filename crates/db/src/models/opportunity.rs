//! Published opportunity entity model and DTOs.

use plaza_core::types::{CalendarDate, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `opportunities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Opportunity {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub deadline: CalendarDate,
    pub eligibility: String,
    pub category: String,
    pub is_free: bool,
    pub link: Option<String>,
    pub flyer_url: Option<String>,
    pub featured: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new opportunity.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOpportunity {
    pub title: String,
    pub description: String,
    pub deadline: CalendarDate,
    pub eligibility: String,
    pub category: String,
    /// Defaults to `false` if omitted.
    pub is_free: Option<bool>,
    pub link: Option<String>,
    pub flyer_url: Option<String>,
}

/// DTO for updating an existing opportunity. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOpportunity {
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<CalendarDate>,
    pub eligibility: Option<String>,
    pub category: Option<String>,
    pub is_free: Option<bool>,
    pub link: Option<String>,
    pub flyer_url: Option<String>,
}
