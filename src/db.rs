//! Database connection pool and table setup.
//!
//! This module provides utilities for:
//! - Creating a PostgreSQL connection pool from the config file settings
//! - Creating the `account` table on startup if it does not exist

use crate::config::DatabaseConfig;
use sqlx::{
    Pool, Postgres,
    postgres::{PgConnectOptions, PgPoolOptions},
};

/// Type alias for PostgreSQL connection pool.
pub type DbPool = Pool<Postgres>;

/// Create a new PostgreSQL connection pool.
///
/// The configured schema is applied as the `search_path` of every connection.
/// Pool sizing is left at the sqlx defaults.
///
/// # Errors
///
/// Returns an error if:
/// - Cannot connect to PostgreSQL server
/// - Database authentication fails
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.db_name)
        .options([("search_path", config.schema.as_str())]);

    // connect_with pings the server, so an unreachable database fails here
    PgPoolOptions::new().connect_with(options).await
}

/// Create the `account` table if it is missing.
///
/// There is no migration tracking; the statement is idempotent and runs on every start.
pub async fn create_account_table(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS account (
            id SERIAL PRIMARY KEY,
            first_name VARCHAR(50) NOT NULL,
            last_name VARCHAR(50) NOT NULL,
            email VARCHAR(50) NOT NULL,
            phone BIGINT NOT NULL DEFAULT 0,
            encrypted_password TEXT NOT NULL,
            balance BIGINT NOT NULL DEFAULT 0,
            created_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
