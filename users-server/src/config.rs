//! Database settings read from the process environment
//!
//! `DB_USER`, `DB_PASSWORD` and `DB_NAME` name the account and database.
//! `DB_HOST`, `DB_PORT` and `DB_SSLMODE` are optional and default to a local
//! server without TLS.

use std::fmt;
use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5432;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),

    #[error("environment variable {name} has invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Connection settings for the users database
#[derive(Clone)]
pub struct DbConfig {
    pub user: String,
    pub password: String,
    pub name: String,
    pub host: String,
    pub port: u16,
    pub ssl_mode: PgSslMode,
    /// Upper bound on pooled connections
    pub max_connections: u32,
}

impl DbConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let user = get("DB_USER").ok_or(ConfigError::Missing("DB_USER"))?;
        let name = get("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?;
        let password = get("DB_PASSWORD").unwrap_or_default();
        let host = get("DB_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match get("DB_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "DB_PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let ssl_mode = match get("DB_SSLMODE") {
            Some(raw) => PgSslMode::from_str(&raw).map_err(|_| ConfigError::Invalid {
                name: "DB_SSLMODE",
                value: raw,
            })?,
            None => PgSslMode::Disable,
        };

        Ok(Self {
            user,
            password,
            name,
            host,
            port,
            ssl_mode,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        })
    }

    /// Override the pool size.
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }

    /// Build sqlx connect options from these settings.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(self.ssl_mode)
    }
}

// Password stays out of logs.
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}
