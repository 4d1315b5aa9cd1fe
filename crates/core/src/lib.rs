//! Causeway domain layer.
//!
//! Pure domain types and logic for the dynamic category attribute engine:
//! the closed [`field_type::FieldType`] enum, the option codec that gives
//! heterogeneous field types a single textual storage form, and the
//! field-definition validation applied before any schema write.
//!
//! Nothing in this crate touches the network or performs I/O; persistence
//! lives in `causeway-db` and the HTTP surface in `causeway-api`.

pub mod error;
pub mod field_type;
pub mod options;
pub mod roles;
pub mod schema;
pub mod types;
