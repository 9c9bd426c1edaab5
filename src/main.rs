//! Account Service - Main Application Entry Point
//!
//! A small REST API for bank accounts: create, list, fetch and delete accounts,
//! log in for a signed token, and submit (not yet executed) transfer requests.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx, behind the `AccountStore` trait
//! - **Authentication**: Argon2 password hashes, HS256 JWT bearer tokens
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables and the database config file
//! 2. Create database connection pool
//! 3. Create the `account` table if missing
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

mod config;
mod db;
mod error;
mod extract;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;
mod state;
mod store;

use std::sync::Arc;

use services::auth_service::TokenKeys;
use state::AppState;
use store::PostgresStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::load()?;
    tracing::info!(path = %config.env.config_path, "Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config.database).await?;
    tracing::info!(host = %config.database.host, "Database pool created");

    db::create_account_table(&pool).await?;
    tracing::info!("Account table ready");

    let state = AppState::new(
        Arc::new(PostgresStore::new(pool)),
        TokenKeys::new(&config.env.jwt_secret, config.env.jwt_ttl_seconds),
    );
    let app = routes::router(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.env.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
