//! Field value entity model and save-batch DTOs.

use causeway_core::field_type::FieldType;
use causeway_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `field_values` table.
///
/// `value` is the stored textual form; multi-select answers are
/// list-encoded and decode via `causeway_core::options::decode_choice_value`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FieldValue {
    pub id: DbId,
    pub record_id: DbId,
    pub field_id: DbId,
    pub category_id: DbId,
    pub value: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One entry of a save batch: the target field and the submitted input.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldValueEntry {
    pub field_id: DbId,
    pub value: ValueInput,
}

/// A submitted value: a single string, or a list for multi-select fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ValueInput {
    Single(String),
    Many(Vec<String>),
}

/// A field value joined with the schema facts a consumer needs to render it
/// without a second lookup.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FieldValueWithField {
    pub id: DbId,
    pub record_id: DbId,
    pub field_id: DbId,
    pub category_id: DbId,
    pub value: String,
    pub field_name: String,
    pub field_type: FieldType,
    pub required: bool,
}
