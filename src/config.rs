//! Application configuration management.
//!
//! Configuration comes from two places:
//! - Environment variables (optionally from a `.env` file), deserialized with `envy`
//! - A TOML file holding the PostgreSQL connection details

use serde::Deserialize;
use std::path::Path;

/// Settings read from environment variables.
///
/// # Environment Variables
///
/// - `JWT_SECRET` (required): HMAC secret used to sign login tokens
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `JWT_TTL_SECONDS` (optional): token lifetime, defaults to 15000
/// - `CONFIG_PATH` (optional): database config file, defaults to `config.toml`
#[derive(Debug, Clone, Deserialize)]
pub struct EnvConfig {
    pub jwt_secret: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_token_ttl")]
    pub jwt_ttl_seconds: i64,

    #[serde(default = "default_config_path")]
    pub config_path: String,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

fn default_token_ttl() -> i64 {
    15000
}

fn default_config_path() -> String {
    "config.toml".to_string()
}

/// PostgreSQL connection details loaded from the config file.
///
/// ```toml
/// host = "localhost"
/// port = 5432
/// user = "postgres"
/// password = "secret"
/// dbName = "bank"
/// schema = "public"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub db_name: String,

    /// Becomes the connection's `search_path`
    #[serde(default = "default_schema")]
    pub schema: String,
}

fn default_schema() -> String {
    "public".to_string()
}

/// Errors raised while loading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unable to read environment configuration: {0}")]
    Env(#[from] envy::Error),

    #[error("unable to open config file {path} for postgres server connection: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to decode config file {path} for postgres server connection: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Full application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub env: EnvConfig,
    pub database: DatabaseConfig,
}

impl Config {
    /// Load environment settings, then the database file they point at.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `JWT_SECRET` is missing or a variable cannot be parsed
    /// - The database config file cannot be read or is malformed
    pub fn load() -> Result<Self, ConfigError> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        let env = envy::from_env::<EnvConfig>()?;
        let database = DatabaseConfig::from_file(&env.config_path)?;

        Ok(Self { env, database })
    }
}

impl DatabaseConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_database_file() {
        let config = DatabaseConfig::from_toml(
            r#"
            host = "localhost"
            port = 5432
            user = "postgres"
            password = "secret"
            dbName = "bank"
            schema = "accounts"
            "#,
        )
        .unwrap();

        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.db_name, "bank");
        assert_eq!(config.schema, "accounts");
    }

    #[test]
    fn schema_defaults_to_public() {
        let config = DatabaseConfig::from_toml(
            r#"
            host = "db"
            port = 5432
            user = "u"
            password = "p"
            dbName = "bank"
            "#,
        )
        .unwrap();

        assert_eq!(config.schema, "public");
    }

    #[test]
    fn missing_field_is_rejected() {
        let result = DatabaseConfig::from_toml(r#"host = "db""#);
        assert!(result.is_err());
    }

    #[test]
    fn unreadable_file_reports_path() {
        let err = DatabaseConfig::from_file("/nonexistent/config.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/config.toml"));
    }
}
