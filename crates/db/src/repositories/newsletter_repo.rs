//! Repository for the `newsletter_signups` table.

use plaza_core::types::DbId;
use sqlx::PgPool;

use crate::models::newsletter::{CreateNewsletterSignup, NewsletterSignup};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, email, agreed, created_at";

/// Provides operations for newsletter signups.
pub struct NewsletterSignupRepo;

impl NewsletterSignupRepo {
    /// Insert a new signup, returning the created row.
    ///
    /// A duplicate email violates `uq_newsletter_signups_email`, which the
    /// API layer maps to 409.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNewsletterSignup,
    ) -> Result<NewsletterSignup, sqlx::Error> {
        let query = format!(
            "INSERT INTO newsletter_signups (first_name, last_name, email, agreed)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsletterSignup>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(input.agreed)
            .fetch_one(pool)
            .await
    }

    /// List all signups ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<NewsletterSignup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM newsletter_signups ORDER BY created_at DESC");
        sqlx::query_as::<_, NewsletterSignup>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete a signup by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM newsletter_signups WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
