//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Validates it and calls the account store
//! 3. Returns a JSON response, or an `AppError` rendered as the error envelope

use crate::error::AppError;
use axum::http::Method;

/// Account management endpoints
pub mod accounts;
/// Login endpoint
pub mod auth;
/// Transfer endpoint
pub mod transfers;


/// Fallback for a known path requested with an unsupported method.
pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(method)
}
