//! Handlers for per-record field values.
//!
//! Records themselves live in the external record subsystem; these
//! endpoints only manage the custom-field answers attached to a record id.

use axum::extract::{Path, State};
use axum::Json;
use causeway_core::types::DbId;
use causeway_db::models::field_value::{FieldValue, FieldValueEntry, FieldValueWithField};
use causeway_db::repositories::FieldValueRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for PUT /records/{record_id}/field-values.
#[derive(Debug, Deserialize)]
pub struct SaveFieldValues {
    pub entries: Vec<FieldValueEntry>,
}

/// GET /api/v1/records/{record_id}/field-values
///
/// Every stored value for the record, joined with the field's name, type,
/// and required flag. Values come back in their stored textual form;
/// decoding multi-select lists is the consumer's job.
pub async fn get_for_record(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(record_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<FieldValueWithField>>>> {
    let values = FieldValueRepo::get_for_record(&state.pool, record_id).await?;
    Ok(Json(DataResponse { data: values }))
}

/// PUT /api/v1/records/{record_id}/field-values
///
/// Batch upsert: each entry overwrites any previous value for its
/// `(record, field)` pair. The batch applies all-or-nothing.
pub async fn save_for_record(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(record_id): Path<DbId>,
    Json(input): Json<SaveFieldValues>,
) -> AppResult<Json<DataResponse<Vec<FieldValue>>>> {
    let saved = FieldValueRepo::save_for_record(&state.pool, record_id, &input.entries).await?;

    tracing::info!(
        user_id = user.user_id,
        record_id,
        count = saved.len(),
        "Field values saved",
    );
    Ok(Json(DataResponse { data: saved }))
}
