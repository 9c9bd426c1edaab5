//! Business logic services.
//!
//! Services contain logic kept separate from HTTP handlers.

pub mod auth_service;
