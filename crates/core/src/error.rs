//! Domain error type shared by all Causeway crates.

use crate::types::DbId;

/// Domain-level errors.
///
/// The HTTP layer maps each variant onto a status code and error code;
/// see `causeway-api`'s `AppError`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by id came up empty.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed a definition-level validation rule.
    #[error("{0}")]
    Validation(String),

    /// The operation conflicts with existing state (e.g. a duplicate name).
    #[error("{0}")]
    Conflict(String),

    /// Missing or invalid credentials.
    #[error("{0}")]
    Unauthorized(String),

    /// Valid credentials, insufficient role.
    #[error("{0}")]
    Forbidden(String),

    /// An invariant was broken; not expected during normal operation.
    #[error("{0}")]
    Internal(String),
}
