//! Token validation for the externally-operated auth service.
//!
//! This service never issues credentials through a login flow; it only
//! validates the HS256 access tokens the auth subsystem signs with the
//! shared secret.

pub mod jwt;
