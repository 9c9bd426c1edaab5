//! Account data models and API request types.
//!
//! This module defines:
//! - `Account`: Database entity and JSON view of an account
//! - `CreateAccountRequest`: Request body for creating accounts

use crate::{error::AppError, services::auth_service};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Represents an account record from the database.
///
/// # Database Table
///
/// Maps to the `account` table, one row per customer.
///
/// # Balance Storage
///
/// Balances are stored as `i64` minor units (cents) to avoid floating-point issues.
///
/// # Serialization
///
/// The password hash is never written to JSON. Field names are camelCase:
/// `id, firstName, lastName, email, phone, balance, createdAt`.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Assigned by the database on insert (`SERIAL`)
    pub id: i32,

    pub first_name: String,

    pub last_name: String,

    /// Unique per account, enforced by a pre-check on creation
    pub email: String,

    pub phone: i64,

    /// Argon2 PHC string
    #[serde(skip_serializing)]
    pub encrypted_password: String,

    /// Current balance in minor currency units
    pub balance: i64,

    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Build a new, not yet stored account with a hashed password.
    ///
    /// `id` is 0 until storage assigns one; balance and phone start at 0.
    ///
    /// # Errors
    ///
    /// - `PasswordHash`: hashing failed
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: &str,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: 0,
            encrypted_password: auth_service::hash_password(password)?,
            balance: 0,
            created_at: Utc::now(),
        })
    }

    pub fn verify_password(&self, password: &str) -> bool {
        auth_service::verify_password(password, &self.encrypted_password)
    }
}

/// Request body for creating a new account.
///
/// # JSON Example
///
/// ```json
/// {
///   "firstName": "Ada",
///   "lastName": "Lovelace",
///   "email": "ada@example.com",
///   "password": "qwerty12"
/// }
/// ```
///
/// # Validation
///
/// - `firstName`, `lastName`: non-empty
/// - `email`: syntactically valid address
/// - `password`: at least 8 characters
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    #[validate(length(min = 1))]
    pub first_name: String,

    #[validate(length(min = 1))]
    pub last_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str) -> CreateAccountRequest {
        CreateAccountRequest {
            first_name: "a".to_string(),
            last_name: "b".to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn new_account_hashes_password() {
        let account = Account::new("a", "b", "abc@abc.com", "qwerty12").unwrap();

        assert_eq!(account.id, 0);
        assert_eq!(account.balance, 0);
        assert_ne!(account.encrypted_password, "qwerty12");
        assert!(account.verify_password("qwerty12"));
        assert!(!account.verify_password("qwerty123"));
    }

    #[test]
    fn json_view_omits_password_hash() {
        let account = Account::new("a", "b", "abc@abc.com", "qwerty12").unwrap();
        let value = serde_json::to_value(&account).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("encryptedPassword"));
        assert!(!object.contains_key("encrypted_password"));
        assert!(!object.contains_key("password"));
        assert_eq!(value["firstName"], "a");
        assert_eq!(value["lastName"], "b");
        assert!(object.contains_key("createdAt"));
    }

    #[test]
    fn valid_request_passes() {
        assert!(request("abc@abc.com", "qwerty12").validate().is_ok());
    }

    #[test]
    fn short_password_fails() {
        let errors = request("abc@abc.com", "qwerty1").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn malformed_email_fails() {
        let errors = request("not-an-email", "qwerty12").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn empty_names_fail() {
        let mut req = request("abc@abc.com", "qwerty12");
        req.first_name.clear();
        req.last_name.clear();

        let errors = req.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 2);
    }
}
