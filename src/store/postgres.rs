//! PostgreSQL implementation of `AccountStore`.

use super::AccountStore;
use crate::{db::DbPool, error::AppError, models::account::Account};
use async_trait::async_trait;

const ACCOUNT_COLUMNS: &str =
    "id, first_name, last_name, email, phone, encrypted_password, balance, created_at";

#[derive(Clone)]
pub struct PostgresStore {
    pool: DbPool,
}

impl PostgresStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PostgresStore {
    async fn create_account(&self, account: &Account) -> Result<Account, AppError> {
        let query = format!(
            r#"
            INSERT INTO account (first_name, last_name, email, phone, encrypted_password, balance, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {ACCOUNT_COLUMNS}
            "#
        );

        let created = sqlx::query_as::<_, Account>(&query)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(&account.email)
            .bind(account.phone)
            .bind(&account.encrypted_password)
            .bind(account.balance)
            .bind(account.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::database(
                    format!(
                        "could not create account for {} {}",
                        account.first_name, account.last_name
                    ),
                    e,
                )
            })?;

        tracing::debug!(id = created.id, "account row inserted");
        Ok(created)
    }

    async fn delete_account(&self, id: i32) -> Result<(), AppError> {
        let deleted = sqlx::query("DELETE FROM account WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("could not delete account with id {id}"), e))?
            .rows_affected();

        tracing::debug!(id, deleted, "account delete executed");
        Ok(())
    }

    async fn update_account(&self, _account: &Account) -> Result<(), AppError> {
        Ok(())
    }

    async fn get_account_by_id(&self, id: i32) -> Result<Account, AppError> {
        let query = format!("SELECT {ACCOUNT_COLUMNS} FROM account WHERE id = $1");

        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("could not get account with id {id}"), e))?
            .ok_or(AppError::AccountNotFound(id))
    }

    async fn get_account_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        let query = format!("SELECT {ACCOUNT_COLUMNS} FROM account WHERE email = $1");

        sqlx::query_as::<_, Account>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("could not get account with email {email}"), e))
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, AppError> {
        let query = format!("SELECT {ACCOUNT_COLUMNS} FROM account ORDER BY id");

        sqlx::query_as::<_, Account>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database("could not get accounts from db", e))
    }
}
