//! Feedback entity model and DTOs.

use plaza_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `feedback` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for creating feedback (public contact form).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFeedback {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,
}
