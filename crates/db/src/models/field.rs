//! Field entity model.
//!
//! Create/update input arrives as a validated
//! [`causeway_core::schema::FieldDefinition`]; there is no separate DTO
//! here because the definition is always validated as a whole.

use causeway_core::field_type::FieldType;
use causeway_core::options::{decode_options, ChoiceOption};
use causeway_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `fields` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Field {
    pub id: DbId,
    pub category_id: DbId,
    pub name: String,
    pub field_type: FieldType,
    pub required: bool,
    pub placeholder: Option<String>,
    /// Serialized choice list; `NULL` for non-choice types.
    pub options: Option<String>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Field {
    /// The decoded choice list (empty for non-choice types).
    pub fn decoded_options(&self) -> Vec<ChoiceOption> {
        decode_options(self.options.as_deref())
    }
}
