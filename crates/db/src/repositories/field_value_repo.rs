//! Repository for the `field_values` table.
//!
//! The write path is the engine's encode choke point: every submitted value
//! passes through [`encode_value`], which dispatches on the field's type and
//! uses the option codec for multi-select answers. Reads return the stored
//! textual form untouched; decoding is the consumer's concern, so raw and
//! decoded representations stay distinguishable.

use std::collections::HashMap;

use causeway_core::field_type::FieldType;
use causeway_core::options::encode_choice_value;
use causeway_core::types::DbId;
use sqlx::PgPool;

use crate::models::field_value::{FieldValue, FieldValueEntry, FieldValueWithField, ValueInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, record_id, field_id, category_id, value, created_at, updated_at";

/// Errors from the batch save operation.
#[derive(Debug, thiserror::Error)]
pub enum SaveValuesError {
    /// An entry referenced a field that does not exist.
    #[error("field with id {0} not found")]
    UnknownField(DbId),

    /// A list was submitted for a field that takes a single value.
    #[error("field {0} takes a single value, got a list")]
    UnexpectedList(DbId),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Persists and retrieves the field values belonging to one record.
pub struct FieldValueRepo;

impl FieldValueRepo {
    /// Upsert the supplied entries for one record, all-or-nothing.
    ///
    /// Each entry's field is resolved inside the transaction; its type
    /// drives the encoding, and the write upserts on `(record_id,
    /// field_id)` so re-submitting overwrites the previous value. An
    /// unknown field ID aborts the whole batch, leaving no partial writes.
    pub async fn save_for_record(
        pool: &PgPool,
        record_id: DbId,
        entries: &[FieldValueEntry],
    ) -> Result<Vec<FieldValue>, SaveValuesError> {
        let mut tx = pool.begin().await?;

        let field_ids: Vec<DbId> = entries.iter().map(|e| e.field_id).collect();
        let rows: Vec<(DbId, FieldType, DbId)> = sqlx::query_as(
            "SELECT id, field_type, category_id FROM fields WHERE id = ANY($1)",
        )
        .bind(&field_ids)
        .fetch_all(&mut *tx)
        .await?;
        let fields: HashMap<DbId, (FieldType, DbId)> = rows
            .into_iter()
            .map(|(id, field_type, category_id)| (id, (field_type, category_id)))
            .collect();

        let upsert = format!(
            "INSERT INTO field_values (record_id, field_id, category_id, value)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT ON CONSTRAINT uq_field_values_record_field
             DO UPDATE SET value = EXCLUDED.value
             RETURNING {COLUMNS}"
        );

        let mut saved = Vec::with_capacity(entries.len());
        for entry in entries {
            let Some(&(field_type, category_id)) = fields.get(&entry.field_id) else {
                return Err(SaveValuesError::UnknownField(entry.field_id));
            };
            let encoded = encode_value(entry.field_id, field_type, &entry.value)?;

            let row = sqlx::query_as::<_, FieldValue>(&upsert)
                .bind(record_id)
                .bind(entry.field_id)
                .bind(category_id)
                .bind(&encoded)
                .fetch_one(&mut *tx)
                .await?;
            saved.push(row);
        }

        tx.commit().await?;
        Ok(saved)
    }

    /// All values for one record, each joined with its field's name, type,
    /// and required flag, in the field display order.
    pub async fn get_for_record(
        pool: &PgPool,
        record_id: DbId,
    ) -> Result<Vec<FieldValueWithField>, sqlx::Error> {
        sqlx::query_as::<_, FieldValueWithField>(
            "SELECT v.id, v.record_id, v.field_id, v.category_id, v.value,
                    f.name AS field_name, f.field_type, f.required
             FROM field_values v
             JOIN fields f ON f.id = v.field_id
             WHERE v.record_id = $1
             ORDER BY f.display_order ASC",
        )
        .bind(record_id)
        .fetch_all(pool)
        .await
    }

    /// Delete all values of one record. Returns the number of rows removed.
    ///
    /// Hook for the external record subsystem's delete flow; field and
    /// category deletion cascade at the schema level instead.
    pub async fn delete_for_record(pool: &PgPool, record_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM field_values WHERE record_id = $1")
            .bind(record_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

/// Encode one submitted value according to its field's type.
///
/// Multi-select answers are list-encoded through the option codec (a bare
/// string is treated as a one-element selection); every other type stores
/// the input as entered (dates arrive pre-normalized to ISO form).
fn encode_value(
    field_id: DbId,
    field_type: FieldType,
    input: &ValueInput,
) -> Result<String, SaveValuesError> {
    match (field_type.is_multi_valued(), input) {
        (true, ValueInput::Many(values)) => Ok(encode_choice_value(values)),
        (true, ValueInput::Single(value)) => {
            Ok(encode_choice_value(std::slice::from_ref(value)))
        }
        (false, ValueInput::Single(value)) => Ok(value.clone()),
        (false, ValueInput::Many(_)) => Err(SaveValuesError::UnexpectedList(field_id)),
    }
}
