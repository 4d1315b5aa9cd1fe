//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod field_repo;
pub mod field_value_repo;

pub use category_repo::CategoryRepo;
pub use field_repo::FieldRepo;
pub use field_value_repo::{FieldValueRepo, SaveValuesError};
