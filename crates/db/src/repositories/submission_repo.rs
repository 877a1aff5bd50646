//! Repository for the `submissions` table and the approval move.

use plaza_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::CreateEvent;
use crate::models::opportunity::CreateOpportunity;
use crate::models::submission::{
    ApprovedRecord, CreateSubmission, Submission, SubmissionDetails,
};
use crate::repositories::{EventRepo, OpportunityRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, submitter_name, submitter_email, title, description, \
                       submission_type, date, time, location, location_type, is_free, \
                       deadline, eligibility, category, link, flyer_url, status, created_at";

/// Provides review-queue operations for submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a new submission, returning the created row.
    ///
    /// New submissions always start in `pending`; the status column
    /// default does that.
    pub async fn create(pool: &PgPool, input: &CreateSubmission) -> Result<Submission, sqlx::Error> {
        let query = format!(
            "INSERT INTO submissions
                (submitter_name, submitter_email, title, description, submission_type,
                 date, time, location, location_type, is_free,
                 deadline, eligibility, category, link, flyer_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(&input.submitter_name)
            .bind(&input.submitter_email)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.submission_type)
            .bind(input.date)
            .bind(&input.time)
            .bind(&input.location)
            .bind(&input.location_type)
            .bind(input.is_free)
            .bind(input.deadline)
            .bind(&input.eligibility)
            .bind(&input.category)
            .bind(&input.link)
            .bind(&input.flyer_url)
            .fetch_one(pool)
            .await
    }

    /// Find a submission by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM submissions WHERE id = $1");
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List submissions, optionally filtered by type and/or status,
    /// newest first.
    pub async fn list(
        pool: &PgPool,
        submission_type: Option<&str>,
        status: Option<&str>,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        if submission_type.is_some() {
            conditions.push(format!("submission_type = ${}", conditions.len() + 1));
        }
        if status.is_some() {
            conditions.push(format!("status = ${}", conditions.len() + 1));
        }

        let mut query = format!("SELECT {COLUMNS} FROM submissions");
        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY created_at DESC");

        let mut q = sqlx::query_as::<_, Submission>(&query);
        if let Some(t) = submission_type {
            q = q.bind(t.to_string());
        }
        if let Some(s) = status {
            q = q.bind(s.to_string());
        }
        q.fetch_all(pool).await
    }

    /// Count submissions awaiting review.
    pub async fn count_pending(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM submissions WHERE status = 'pending'")
            .fetch_one(pool)
            .await
    }

    /// Set a submission's status, returning the updated row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("UPDATE submissions SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a submission by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM submissions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Move an approved submission into its published table.
    ///
    /// Inserts the derived record and deletes the submission row inside a
    /// single transaction; a failed insert rolls the whole move back, so
    /// a record can never end up both published and still pending. Fails
    /// with `RowNotFound` when the submission row is already gone (a
    /// concurrent reviewer won), in which case nothing is published.
    pub async fn publish(
        pool: &PgPool,
        submission: &Submission,
        details: &SubmissionDetails,
    ) -> Result<ApprovedRecord, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let record = match details {
            SubmissionDetails::Event {
                date,
                time,
                location,
                location_type,
                is_free,
            } => {
                let input = CreateEvent {
                    title: submission.title.clone(),
                    description: submission.description.clone(),
                    date: *date,
                    time: time.clone(),
                    location: location.clone(),
                    location_type: location_type.clone(),
                    is_free: Some(*is_free),
                    link: submission.link.clone(),
                    flyer_url: submission.flyer_url.clone(),
                };
                ApprovedRecord::Event(EventRepo::insert(&mut *tx, &input).await?)
            }
            SubmissionDetails::Opportunity {
                deadline,
                eligibility,
                category,
                is_free,
            } => {
                let input = CreateOpportunity {
                    title: submission.title.clone(),
                    description: submission.description.clone(),
                    deadline: *deadline,
                    eligibility: eligibility.clone(),
                    category: category.clone(),
                    is_free: Some(*is_free),
                    link: submission.link.clone(),
                    flyer_url: submission.flyer_url.clone(),
                };
                ApprovedRecord::Opportunity(OpportunityRepo::insert(&mut *tx, &input).await?)
            }
        };

        let deleted = sqlx::query("DELETE FROM submissions WHERE id = $1")
            .bind(submission.id)
            .execute(&mut *tx)
            .await?;
        if deleted.rows_affected() == 0 {
            // Dropping the transaction rolls back the insert.
            return Err(sqlx::Error::RowNotFound);
        }

        tx.commit().await?;
        Ok(record)
    }
}
