//! Error types and HTTP error response handling.
//!
//! Every handler error becomes HTTP 400 with a `{"error": "<message>"}` body.
//! The only exception is a rejected bearer token, which is HTTP 403.

use axum::{
    Json,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Storage Errors**: a sqlx::Error plus the operation that failed
/// - **Request Errors**: malformed bodies, ids, or failed validation
/// - **Authentication Errors**: bad login credentials or a rejected token
/// - **Internal Errors**: password hashing or token signing failures
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed. `context` names the operation.
    #[error("{context}: {source}")]
    Database {
        context: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("account with id {0} not found")]
    AccountNotFound(i32),

    /// Email pre-check found an existing row.
    #[error("account with email address {0} already exists")]
    DuplicateEmail(String),

    #[error("{0}")]
    Validation(String),

    /// Path segment that should have been an account id.
    #[error("id {0} provided is not an integer")]
    InvalidId(String),

    /// JSON body could not be decoded into the expected shape.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// Login failed. Unknown email and wrong password are reported the same way.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Bearer token missing, malformed, expired, or wrongly signed.
    ///
    /// Returns HTTP 403 Forbidden.
    #[error("invalid token")]
    InvalidToken,

    #[error("could not hash password: {0}")]
    PasswordHash(String),

    #[error("could not issue token: {0}")]
    TokenIssue(#[from] jsonwebtoken::errors::Error),

    #[error("method not allowed: {0}")]
    MethodNotAllowed(Method),
}

impl AppError {
    /// Wrap a driver error with the operation that produced it.
    pub fn database(context: impl Into<String>, source: sqlx::Error) -> Self {
        AppError::Database {
            context: context.into(),
            source,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidToken => StatusCode::FORBIDDEN,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// { "error": "account with id 7 not found" }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database { .. } | AppError::PasswordHash(_) | AppError::TokenIssue(_) => {
                tracing::error!(error = %self, "request failed");
            }
            _ => tracing::debug!(error = %self, "request rejected"),
        }

        let body = Json(json!({ "error": self.to_string() }));

        (self.status(), body).into_response()
    }
}
