//! Storage adapter for the `account` table.
//!
//! `AccountStore` is the only seam that issues SQL. Each method runs exactly one
//! statement; there are no transactions, retries, or batching.

use crate::{error::AppError, models::account::Account};
use async_trait::async_trait;

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PostgresStore;

/// Account persistence operations.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new row and return it with the id the database assigned.
    async fn create_account(&self, account: &Account) -> Result<Account, AppError>;

    async fn delete_account(&self, id: i32) -> Result<(), AppError>;

    /// Accepted but not applied.
    async fn update_account(&self, account: &Account) -> Result<(), AppError>;

    /// # Errors
    ///
    /// - `AccountNotFound`: no row with this id
    async fn get_account_by_id(&self, id: i32) -> Result<Account, AppError>;

    async fn get_account_by_email(&self, email: &str) -> Result<Option<Account>, AppError>;

    /// All accounts, ordered by id.
    async fn get_accounts(&self) -> Result<Vec<Account>, AppError>;
}
