//! HTTP middleware components.
//!
//! Middleware run before route handlers and can short-circuit requests
//! (for example, rejecting a missing bearer token).

/// Bearer token authentication middleware
pub mod auth;
