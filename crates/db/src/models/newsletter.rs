//! Newsletter signup entity model and DTOs.

use plaza_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `newsletter_signups` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NewsletterSignup {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub agreed: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a newsletter signup (public signup form).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNewsletterSignup {
    #[validate(length(min = 1, message = "first_name must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name must not be empty"))]
    pub last_name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    pub agreed: bool,
}
