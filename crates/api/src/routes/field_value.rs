//! Route definitions for per-record field values.

use axum::routing::get;
use axum::Router;

use crate::handlers::field_value;
use crate::state::AppState;

/// Routes mounted at `/records`.
///
/// ```text
/// GET /{record_id}/field-values   -> get_for_record
/// PUT /{record_id}/field-values   -> save_for_record (batch upsert)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{record_id}/field-values",
        get(field_value::get_for_record).put(field_value::save_for_record),
    )
}
