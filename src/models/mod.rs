//! Data models and request/response bodies.

/// Account entity and creation request
pub mod account;
/// Login request and response
pub mod auth;
/// Transfer request
pub mod transfer;
