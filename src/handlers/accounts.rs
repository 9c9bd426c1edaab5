//! Account management HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - GET /account - List all accounts
//! - POST /account - Create new account
//! - GET /account/{id} - Get account by ID (token required)
//! - DELETE /account/{id} - Delete account by ID (token required)

use crate::{
    error::AppError,
    extract::{AccountId, ApiJson},
    models::account::{Account, CreateAccountRequest},
    services::auth_service::Claims,
    state::AppState,
};
use axum::{Extension, Json, extract::State};
use validator::Validate;

/// List every account.
///
/// # Response
///
/// - **Success (200 OK)**: array of accounts, possibly empty
/// - **Error (400)**: storage error
pub async fn list_accounts(State(state): State<AppState>) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = state.store.get_accounts().await?;

    Ok(Json(accounts))
}

/// Create a new account.
///
/// # Request Body
///
/// ```json
/// {
///   "firstName": "a",
///   "lastName": "b",
///   "email": "abc@abc.com",
///   "password": "qwerty12"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: the stored account with its assigned `id`
/// - **Error (400)**: invalid body, duplicate email, or storage error
///
/// # Duplicate Emails
///
/// The email lookup and the insert are separate statements. Two concurrent
/// registrations with the same address can both pass the check.
pub async fn create_account(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateAccountRequest>,
) -> Result<Json<Account>, AppError> {
    request
        .validate()
        .map_err(|e| AppError::Validation(format!("invalid request format: {e}")))?;

    if state
        .store
        .get_account_by_email(&request.email)
        .await?
        .is_some()
    {
        return Err(AppError::DuplicateEmail(request.email));
    }

    let account = Account::new(
        request.first_name,
        request.last_name,
        request.email,
        &request.password,
    )?;

    let created = state.store.create_account(&account).await?;
    tracing::info!(id = created.id, "account created");

    Ok(Json(created))
}

/// Get a specific account by ID.
///
/// # Response
///
/// - **Success (200 OK)**: account details
/// - **Error (400)**: non-integer id or account not found
/// - **Error (403)**: missing or invalid token
pub async fn get_account(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    AccountId(id): AccountId,
) -> Result<Json<Account>, AppError> {
    tracing::debug!(id, caller = claims.account_id, "fetching account");
    let account = state.store.get_account_by_id(id).await?;

    Ok(Json(account))
}

/// Delete an account by ID.
///
/// # Response
///
/// - **Success (200 OK)**: `"OK"`
/// - **Error (400)**: non-integer id or storage error
/// - **Error (403)**: missing or invalid token
pub async fn delete_account(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    AccountId(id): AccountId,
) -> Result<Json<&'static str>, AppError> {
    state.store.delete_account(id).await?;
    tracing::info!(id, caller = claims.account_id, "account deleted");

    Ok(Json("OK"))
}
