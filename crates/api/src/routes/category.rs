//! Route definitions for categories and their nested field operations.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{category, field};
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET    /                      -> list
/// POST   /                      -> create
/// GET    /{id}                  -> get_by_id (with ordered fields)
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
/// POST   /{id}/fields           -> field::create
/// PUT    /{id}/fields/order     -> field::reorder
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(category::list).post(category::create))
        .route(
            "/{id}",
            get(category::get_by_id)
                .put(category::update)
                .delete(category::delete),
        )
        .route("/{id}/fields", post(field::create))
        .route("/{id}/fields/order", put(field::reorder))
}
