//! Handlers for category field definitions and their display order.
//!
//! Creation and reordering are scoped under the owning category
//! (`/categories/{id}/fields[...]`); update and delete address a field by
//! its own id (`/fields/{id}`). Every definition passes through
//! [`FieldDefinition::parse`] so invalid types and missing choice lists are
//! rejected with a field-level message before anything touches the
//! database.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use causeway_core::error::CoreError;
use causeway_core::schema::{FieldDefinition, FieldDefinitionInput};
use causeway_core::types::DbId;
use causeway_db::models::field::Field;
use causeway_db::repositories::{CategoryRepo, FieldRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for PUT /categories/{id}/fields/order: the complete ordered
/// list of the category's field IDs after the move.
#[derive(Debug, Deserialize)]
pub struct ReorderFields {
    pub field_ids: Vec<DbId>,
}

/// POST /api/v1/categories/{category_id}/fields
///
/// Validates the definition and appends the field to the end of the
/// category's display sequence.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
    Json(input): Json<FieldDefinitionInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Field>>)> {
    let def = FieldDefinition::parse(input)?;
    ensure_category_exists(&state, category_id).await?;

    let field = FieldRepo::create(&state.pool, category_id, &def).await?;
    tracing::info!(
        admin_id = admin.user_id,
        category_id,
        field_id = field.id,
        field_type = %field.field_type,
        "Field added",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: field })))
}

/// PUT /api/v1/fields/{id}
///
/// Replaces the field's definition; its position in the display sequence
/// is preserved.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<FieldDefinitionInput>,
) -> AppResult<Json<DataResponse<Field>>> {
    let def = FieldDefinition::parse(input)?;
    let field = FieldRepo::update(&state.pool, id, &def)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Field", id }))?;
    Ok(Json(DataResponse { data: field }))
}

/// DELETE /api/v1/fields/{id}
///
/// Irreversible: every value stored against the field goes with it, and
/// the category's remaining fields close the gap in the display sequence.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = FieldRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::warn!(
            admin_id = admin.user_id,
            field_id = id,
            "Field deleted with all stored values",
        );
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Field", id }))
    }
}

/// PUT /api/v1/categories/{category_id}/fields/order
///
/// Applies a drag-and-drop result: the body carries the complete ordered
/// id list, and the whole sequence is rewritten in one transaction.
/// Responds with the category's fields in their new order.
pub async fn reorder(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
    Json(input): Json<ReorderFields>,
) -> AppResult<Json<DataResponse<Vec<Field>>>> {
    ensure_category_exists(&state, category_id).await?;

    FieldRepo::reorder(&state.pool, category_id, &input.field_ids).await?;
    let fields = FieldRepo::list_by_category(&state.pool, category_id).await?;
    Ok(Json(DataResponse { data: fields }))
}

async fn ensure_category_exists(state: &AppState, category_id: DbId) -> AppResult<()> {
    CategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }))?;
    Ok(())
}
