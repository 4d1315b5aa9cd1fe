//! Repository for the `categories` table.

use causeway_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{
    Category, CategoryWithFieldCount, CategoryWithFields, CreateCategory, UpdateCategory,
};
use crate::repositories::FieldRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, icon, created_at, updated_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories with their derived field count, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<CategoryWithFieldCount>, sqlx::Error> {
        sqlx::query_as::<_, CategoryWithFieldCount>(
            "SELECT c.id, c.name, c.description, c.icon,
                    COUNT(f.id) AS field_count,
                    c.created_at, c.updated_at
             FROM categories c
             LEFT JOIN fields f ON f.category_id = c.id
             GROUP BY c.id
             ORDER BY c.name ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Find a category by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a category together with its fields, sorted by `display_order`
    /// ascending.
    pub async fn find_with_fields(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CategoryWithFields>, sqlx::Error> {
        let Some(category) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let fields = FieldRepo::list_by_category(pool, id).await?;
        Ok(Some(CategoryWithFields { category, fields }))
    }

    /// Insert a new category, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, description, icon)
             VALUES ($1, COALESCE($2, ''), $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.icon)
            .fetch_one(pool)
            .await
    }

    /// Update a category. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                icon = COALESCE($4, icon)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.icon)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID. Returns `true` if a row was removed.
    ///
    /// The category's fields and all field values stored against them go
    /// with it (ON DELETE CASCADE); there is no soft-delete or undo.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
