//! Resource entity model and DTOs.

use plaza_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `resources` table.
///
/// Premium resources link out to a paid listing; free resources carry a
/// `file_url` pointing at the uploaded object.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Resource {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub is_premium: bool,
    pub price: Option<f64>,
    pub file_url: Option<String>,
    pub featured: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new resource.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateResource {
    pub title: String,
    pub description: String,
    pub category: String,
    /// Defaults to `false` if omitted.
    pub is_premium: Option<bool>,
    pub price: Option<f64>,
    pub file_url: Option<String>,
}

/// DTO for updating an existing resource. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateResource {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub is_premium: Option<bool>,
    pub price: Option<f64>,
    pub file_url: Option<String>,
}
