//! Repository for the `events` table.

use plaza_core::types::{CalendarDate, DbId};
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event, UpdateEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, date, time, location, location_type, \
                       is_free, link, flyer_url, featured, created_at";

/// Provides CRUD, feature-toggle, and expiry operations for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        Self::insert(pool, input).await
    }

    /// Insert against any executor so the approval transaction can reuse
    /// the same statement.
    pub(crate) async fn insert<'e, E>(executor: E, input: &CreateEvent) -> Result<Event, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO events
                (title, description, date, time, location, location_type, is_free, link, flyer_url)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, FALSE), $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.date)
            .bind(&input.time)
            .bind(&input.location)
            .bind(&input.location_type)
            .bind(input.is_free)
            .bind(&input.link)
            .bind(&input.flyer_url)
            .fetch_one(executor)
            .await
    }

    /// Find an event by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all events ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY created_at DESC");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// Update an event. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                date = COALESCE($4, date),
                time = COALESCE($5, time),
                location = COALESCE($6, location),
                location_type = COALESCE($7, location_type),
                is_free = COALESCE($8, is_free),
                link = COALESCE($9, link),
                flyer_url = COALESCE($10, flyer_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.date)
            .bind(&input.time)
            .bind(&input.location)
            .bind(&input.location_type)
            .bind(input.is_free)
            .bind(&input.link)
            .bind(&input.flyer_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Flip the featured flag in the store, returning the updated row.
    ///
    /// The negation happens in SQL so concurrent toggles each flip exactly
    /// once instead of replaying a stale cached value.
    pub async fn toggle_featured(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET featured = NOT featured WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List `(id, date)` pairs for all events, soonest first.
    ///
    /// Input to the expiry sweep; the strictly-before filter happens in
    /// `plaza_core::expiry` so the cutoff rule lives in one place.
    pub async fn list_dates(pool: &PgPool) -> Result<Vec<(DbId, CalendarDate)>, sqlx::Error> {
        sqlx::query_as::<_, (DbId, CalendarDate)>("SELECT id, date FROM events ORDER BY date")
            .fetch_all(pool)
            .await
    }

    /// Batch delete by id set, returning the number of rows removed.
    pub async fn delete_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
