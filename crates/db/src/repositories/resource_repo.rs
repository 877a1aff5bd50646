//! Repository for the `resources` table.

use plaza_core::types::DbId;
use sqlx::PgPool;

use crate::models::resource::{CreateResource, Resource, UpdateResource};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, category, is_premium, price, file_url, featured, created_at";

/// Provides CRUD and feature-toggle operations for resources.
pub struct ResourceRepo;

impl ResourceRepo {
    /// Insert a new resource, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateResource) -> Result<Resource, sqlx::Error> {
        let query = format!(
            "INSERT INTO resources (title, description, category, is_premium, price, file_url)
             VALUES ($1, $2, $3, COALESCE($4, FALSE), $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.is_premium)
            .bind(input.price)
            .bind(&input.file_url)
            .fetch_one(pool)
            .await
    }

    /// Find a resource by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources WHERE id = $1");
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all resources ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources ORDER BY created_at DESC");
        sqlx::query_as::<_, Resource>(&query).fetch_all(pool).await
    }

    /// Update a resource. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateResource,
    ) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!(
            "UPDATE resources SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                is_premium = COALESCE($5, is_premium),
                price = COALESCE($6, price),
                file_url = COALESCE($7, file_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.is_premium)
            .bind(input.price)
            .bind(&input.file_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a resource by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Flip the featured flag in the store, returning the updated row.
    pub async fn toggle_featured(pool: &PgPool, id: DbId) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!(
            "UPDATE resources SET featured = NOT featured WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
