//! Category entity model and DTOs.

use causeway_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::field::Field;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A category row joined with its derived field count (list view).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryWithFieldCount {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
    pub field_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A category together with its fields, pre-sorted by `display_order`.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryWithFields {
    #[serde(flatten)]
    pub category: Category,
    pub fields: Vec<Field>,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// DTO for updating a category. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}
