//! Login request and response bodies.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /login`.
///
/// ```json
/// { "email": "ada@example.com", "password": "qwerty12" }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Successful login.
///
/// The same token is also sent in the `Authorization: Bearer <token>` response header.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub email: String,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_is_invalid() {
        let req = LoginRequest {
            email: "abc@abc.com".to_string(),
            password: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn malformed_email_is_invalid() {
        let req = LoginRequest {
            email: "abc".to_string(),
            password: "qwerty12".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
