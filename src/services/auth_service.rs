//! Authentication service - password hashing and login tokens.
//!
//! This service handles:
//! - Salted Argon2 password hashes (PHC string format)
//! - Issuing HMAC-signed JWTs that carry an account id and an expiry
//! - Verifying those tokens statelessly on every protected request

use crate::error::AppError;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand_core::OsRng;
use serde::{Deserialize, Serialize};

/// Hash a plaintext password with a fresh random salt.
///
/// # Errors
///
/// - `PasswordHash`: Argon2 rejected the input or parameters
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::PasswordHash(e.to_string()))
}

/// Check a plaintext password against a stored hash.
///
/// A stored value that is not a valid PHC string never matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(error = %e, "stored password hash could not be parsed");
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Claims carried by a login token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "accountId")]
    pub account_id: i32,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

/// Signing keys and token lifetime, built once from the server secret.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenKeys {
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(ttl_seconds),
        }
    }

    /// Issue an HS256 token for `account_id`, expiring after the configured lifetime.
    pub fn issue(&self, account_id: i32) -> Result<String, AppError> {
        let claims = Claims {
            account_id,
            exp: (Utc::now() + self.ttl).timestamp(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verify signature and expiry, returning the decoded claims.
    ///
    /// Only the HMAC family is accepted; any other `alg` in the header is rejected.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::warn!(error = %e, "token verification failed");
                AppError::InvalidToken
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-must-be-at-least-32-chars-long!";

    #[test]
    fn hash_verifies_only_the_original_password() {
        let hash = hash_password("qwerty12").unwrap();

        assert_ne!(hash, "qwerty12");
        assert!(verify_password("qwerty12", &hash));
        assert!(!verify_password("qwerty13", &hash));
        assert!(!verify_password("", &hash));
    }

    #[test]
    fn same_password_gets_different_salts() {
        let first = hash_password("qwerty12").unwrap();
        let second = hash_password("qwerty12").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn garbage_hash_never_matches() {
        assert!(!verify_password("qwerty12", "not-a-phc-string"));
    }

    #[test]
    fn token_round_trips_account_id() {
        let keys = TokenKeys::new(SECRET, 15000);
        let token = keys.issue(5).unwrap();
        let claims = keys.verify(&token).unwrap();

        assert_eq!(claims.account_id, 5);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn token_from_other_secret_is_rejected() {
        let token = TokenKeys::new("some-other-secret", 15000).issue(5).unwrap();
        let result = TokenKeys::new(SECRET, 15000).verify(&token);

        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let keys = TokenKeys::new(SECRET, -3600);
        let token = keys.issue(5).unwrap();

        assert!(matches!(keys.verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn tampered_token_is_rejected() {
        let keys = TokenKeys::new(SECRET, 15000);
        let mut token = keys.issue(5).unwrap();
        token.push('x');

        assert!(matches!(keys.verify(&token), Err(AppError::InvalidToken)));
        assert!(matches!(keys.verify("not.a.token"), Err(AppError::InvalidToken)));
    }

    #[test]
    fn claims_use_camel_case_account_id() {
        let value = serde_json::to_value(Claims { account_id: 5, exp: 10 }).unwrap();
        assert_eq!(value, serde_json::json!({ "accountId": 5, "exp": 10 }));
    }
}
