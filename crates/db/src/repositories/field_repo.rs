//! Repository for the `fields` table.
//!
//! Owns the field schema of a category, including the `display_order`
//! sequence: within one category the orders always form a contiguous
//! zero-based run. New fields append at the end, deletion re-sequences the
//! survivors, and [`FieldRepo::reorder`] rewrites the whole sequence in one
//! transaction.

use causeway_core::options::encode_options;
use causeway_core::schema::FieldDefinition;
use causeway_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::field::Field;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, category_id, name, field_type, required, placeholder, \
    options, display_order, created_at, updated_at";

/// Provides CRUD and ordering operations for category fields.
pub struct FieldRepo;

impl FieldRepo {
    /// Append a new field to a category, returning the created row.
    ///
    /// `display_order` is assigned the category's current field count, so
    /// the field lands at the end of the sequence. Count and insert run in
    /// one transaction.
    pub async fn create(
        pool: &PgPool,
        category_id: DbId,
        def: &FieldDefinition,
    ) -> Result<Field, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM fields WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO fields
                (category_id, name, field_type, required, placeholder, options, display_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let field = sqlx::query_as::<_, Field>(&query)
            .bind(category_id)
            .bind(&def.name)
            .bind(def.field_type)
            .bind(def.required)
            .bind(&def.placeholder)
            .bind(encoded_options(def))
            .bind(count as i32)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(field)
    }

    /// Find a field by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Field>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fields WHERE id = $1");
        sqlx::query_as::<_, Field>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a category's fields in display order.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Field>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM fields
             WHERE category_id = $1
             ORDER BY display_order ASC"
        );
        sqlx::query_as::<_, Field>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a field's definition. `display_order` is never touched here.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        def: &FieldDefinition,
    ) -> Result<Option<Field>, sqlx::Error> {
        let query = format!(
            "UPDATE fields SET
                name = $2,
                field_type = $3,
                required = $4,
                placeholder = $5,
                options = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Field>(&query)
            .bind(id)
            .bind(&def.name)
            .bind(def.field_type)
            .bind(def.required)
            .bind(&def.placeholder)
            .bind(encoded_options(def))
            .fetch_optional(pool)
            .await
    }

    /// Delete a field by ID. Returns `true` if a row was removed.
    ///
    /// Stored values cascade with the field, and the remaining fields of
    /// the category are re-sequenced so `display_order` stays a contiguous
    /// zero-based run. Both steps commit together.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let deleted: Option<(DbId,)> =
            sqlx::query_as("DELETE FROM fields WHERE id = $1 RETURNING category_id")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((category_id,)) = deleted else {
            return Ok(false);
        };

        Self::resequence(&mut tx, category_id).await?;
        tx.commit().await?;
        Ok(true)
    }

    /// Rewrite a category's display sequence from a caller-supplied full
    /// ordering of its field IDs: `display_order = index`, zero-based.
    ///
    /// All assignments apply as one transaction; the deferred uniqueness
    /// constraint on `(category_id, display_order)` is checked at commit.
    /// The caller is responsible for supplying the complete set of the
    /// category's field IDs; IDs outside the category are ignored by the
    /// `category_id` guard, and membership is not otherwise validated.
    /// Re-running with the same list is a no-op.
    pub async fn reorder(
        pool: &PgPool,
        category_id: DbId,
        ordered_field_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        for (index, field_id) in ordered_field_ids.iter().enumerate() {
            sqlx::query(
                "UPDATE fields SET display_order = $1 WHERE id = $2 AND category_id = $3",
            )
            .bind(index as i32)
            .bind(field_id)
            .bind(category_id)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    async fn resequence(
        tx: &mut Transaction<'_, Postgres>,
        category_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE fields SET display_order = ranked.new_order
             FROM (SELECT id,
                          (ROW_NUMBER() OVER (ORDER BY display_order) - 1)::INT AS new_order
                   FROM fields
                   WHERE category_id = $1) ranked
             WHERE fields.id = ranked.id",
        )
        .bind(category_id)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}

fn encoded_options(def: &FieldDefinition) -> Option<String> {
    if def.options.is_empty() {
        None
    } else {
        Some(encode_options(&def.options))
    }
}
