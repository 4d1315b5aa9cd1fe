//! Route definitions for fields addressed by their own id.
//!
//! Field creation and reordering are category-scoped and live under
//! [`super::category::router`].

use axum::routing::put;
use axum::Router;

use crate::handlers::field;
use crate::state::AppState;

/// Routes mounted at `/fields`.
///
/// ```text
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete (cascades stored values)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", put(field::update).delete(field::delete))
}
