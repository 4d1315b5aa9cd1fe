pub mod category;
pub mod field;
pub mod field_value;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                         list (auth), create (admin)
/// /categories/{id}                    get with ordered fields (auth),
///                                     update, delete (admin, cascades)
/// /categories/{id}/fields             add field (admin)
/// /categories/{id}/fields/order       reorder, full id list (admin)
///
/// /fields/{id}                        update, delete (admin, cascades)
///
/// /records/{record_id}/field-values   get, save batch upsert (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .nest("/fields", field::router())
        .nest("/records", field_value::router())
}
