//! Repository for the `jobs` table.

use plaza_core::types::DbId;
use sqlx::PgPool;

use crate::models::job::{CreateJob, Job, UpdateJob};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, company, location, job_type, \
                       salary_range, deadline, requirements, link, featured, created_at";

/// Provides CRUD and feature-toggle operations for job listings.
pub struct JobRepo;

impl JobRepo {
    /// Insert a new job listing, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateJob) -> Result<Job, sqlx::Error> {
        let query = format!(
            "INSERT INTO jobs
                (title, description, company, location, job_type, salary_range,
                 deadline, requirements, link)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.company)
            .bind(&input.location)
            .bind(&input.job_type)
            .bind(&input.salary_range)
            .bind(input.deadline)
            .bind(&input.requirements)
            .bind(&input.link)
            .fetch_one(pool)
            .await
    }

    /// Find a job listing by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Job>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jobs WHERE id = $1");
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all job listings ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Job>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jobs ORDER BY created_at DESC");
        sqlx::query_as::<_, Job>(&query).fetch_all(pool).await
    }

    /// Update a job listing. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateJob,
    ) -> Result<Option<Job>, sqlx::Error> {
        let query = format!(
            "UPDATE jobs SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                company = COALESCE($4, company),
                location = COALESCE($5, location),
                job_type = COALESCE($6, job_type),
                salary_range = COALESCE($7, salary_range),
                deadline = COALESCE($8, deadline),
                requirements = COALESCE($9, requirements),
                link = COALESCE($10, link)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.company)
            .bind(&input.location)
            .bind(&input.job_type)
            .bind(&input.salary_range)
            .bind(input.deadline)
            .bind(&input.requirements)
            .bind(&input.link)
            .fetch_optional(pool)
            .await
    }

    /// Delete a job listing by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Flip the featured flag in the store, returning the updated row.
    pub async fn toggle_featured(pool: &PgPool, id: DbId) -> Result<Option<Job>, sqlx::Error> {
        let query =
            format!("UPDATE jobs SET featured = NOT featured WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
