//! Repository for the `opportunities` table.

use plaza_core::types::{CalendarDate, DbId};
use sqlx::PgPool;

use crate::models::opportunity::{CreateOpportunity, Opportunity, UpdateOpportunity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, deadline, eligibility, category, \
                       is_free, link, flyer_url, featured, created_at";

/// Provides CRUD, feature-toggle, and expiry operations for opportunities.
pub struct OpportunityRepo;

impl OpportunityRepo {
    /// Insert a new opportunity, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOpportunity,
    ) -> Result<Opportunity, sqlx::Error> {
        Self::insert(pool, input).await
    }

    /// Insert against any executor so the approval transaction can reuse
    /// the same statement.
    pub(crate) async fn insert<'e, E>(
        executor: E,
        input: &CreateOpportunity,
    ) -> Result<Opportunity, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO opportunities
                (title, description, deadline, eligibility, category, is_free, link, flyer_url)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, FALSE), $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Opportunity>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.deadline)
            .bind(&input.eligibility)
            .bind(&input.category)
            .bind(input.is_free)
            .bind(&input.link)
            .bind(&input.flyer_url)
            .fetch_one(executor)
            .await
    }

    /// Find an opportunity by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Opportunity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM opportunities WHERE id = $1");
        sqlx::query_as::<_, Opportunity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all opportunities ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Opportunity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM opportunities ORDER BY created_at DESC");
        sqlx::query_as::<_, Opportunity>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update an opportunity. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOpportunity,
    ) -> Result<Option<Opportunity>, sqlx::Error> {
        let query = format!(
            "UPDATE opportunities SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                deadline = COALESCE($4, deadline),
                eligibility = COALESCE($5, eligibility),
                category = COALESCE($6, category),
                is_free = COALESCE($7, is_free),
                link = COALESCE($8, link),
                flyer_url = COALESCE($9, flyer_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Opportunity>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.deadline)
            .bind(&input.eligibility)
            .bind(&input.category)
            .bind(input.is_free)
            .bind(&input.link)
            .bind(&input.flyer_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete an opportunity by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM opportunities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Flip the featured flag in the store, returning the updated row.
    pub async fn toggle_featured(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Opportunity>, sqlx::Error> {
        let query = format!(
            "UPDATE opportunities SET featured = NOT featured WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Opportunity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List `(id, deadline)` pairs for all opportunities, soonest first.
    pub async fn list_deadlines(pool: &PgPool) -> Result<Vec<(DbId, CalendarDate)>, sqlx::Error> {
        sqlx::query_as::<_, (DbId, CalendarDate)>(
            "SELECT id, deadline FROM opportunities ORDER BY deadline",
        )
        .fetch_all(pool)
        .await
    }

    /// Batch delete by id set, returning the number of rows removed.
    pub async fn delete_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM opportunities WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
