//! Login endpoint.

use crate::{
    error::AppError,
    extract::ApiJson,
    models::auth::{LoginRequest, LoginResponse},
    state::AppState,
};
use axum::{
    Json,
    extract::State,
    http::header::AUTHORIZATION,
    response::IntoResponse,
};
use validator::Validate;

/// Exchange email and password for a signed token.
///
/// # Request Body
///
/// ```json
/// { "email": "abc@abc.com", "password": "qwerty12" }
/// ```
///
/// # Response (200)
///
/// Header `Authorization: Bearer <token>` and body:
///
/// ```json
/// { "email": "abc@abc.com", "token": "<token>" }
/// ```
///
/// An unknown email and a wrong password produce the same error.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    request
        .validate()
        .map_err(|_| AppError::Validation("invalid login request format".to_string()))?;

    let Some(account) = state.store.get_account_by_email(&request.email).await? else {
        tracing::warn!("login attempt for unknown email");
        return Err(AppError::InvalidCredentials);
    };

    if !account.verify_password(&request.password) {
        tracing::warn!(id = account.id, "login attempt with wrong password");
        return Err(AppError::InvalidCredentials);
    }

    let token = state.tokens.issue(account.id)?;
    tracing::info!(id = account.id, "login succeeded");

    Ok((
        [(AUTHORIZATION, format!("Bearer {token}"))],
        Json(LoginResponse {
            email: request.email,
            token,
        }),
    ))
}
