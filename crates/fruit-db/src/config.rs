//! Connection configuration.
//!
//! Settings are read from environment variables with fallback to defaults.
//!
//! | Variable                         | Default       |
//! |----------------------------------|---------------|
//! | `FRUIT_DB_USER`                  | (required)    |
//! | `FRUIT_DB_PASSWORD`              | empty         |
//! | `FRUIT_DB_HOST`                  | `localhost`   |
//! | `FRUIT_DB_PORT`                  | `3306`        |
//! | `FRUIT_DB_NAME`                  | `fruit_store` |
//! | `FRUIT_DB_CONNECT_TIMEOUT_SECS`  | `10`          |

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use sqlx::mysql::MySqlConnectOptions;

pub const ENV_USER: &str = "FRUIT_DB_USER";
pub const ENV_PASSWORD: &str = "FRUIT_DB_PASSWORD";
pub const ENV_HOST: &str = "FRUIT_DB_HOST";
pub const ENV_PORT: &str = "FRUIT_DB_PORT";
pub const ENV_NAME: &str = "FRUIT_DB_NAME";
pub const ENV_CONNECT_TIMEOUT: &str = "FRUIT_DB_CONNECT_TIMEOUT_SECS";

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

/// Database connection settings.
///
/// ## Example
/// ```rust
/// use fruit_db::DbConfig;
///
/// let config = DbConfig::new("fruit_app", "secret", "fruit_store")
///     .host("db.internal")
///     .max_connections(2);
/// assert_eq!(config.redacted_url(), "mysql://fruit_app@db.internal:3306/fruit_store");
/// ```
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,

    /// Maximum number of connections in the pool.
    /// Default: 2 (one logical caller at a time)
    pub max_connections: u32,

    /// Connection timeout duration.
    /// Default: 10 seconds
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection.
    /// Default: 10 minutes
    pub idle_timeout: Duration,
}

impl DbConfig {
    /// Creates a configuration for `localhost:3306`.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        DbConfig {
            host: "localhost".to_string(),
            port: 3306,
            username: username.into(),
            password: password.into(),
            database: database.into(),
            max_connections: 2,
            connect_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(600),
        }
    }

    /// Sets the host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let username = lookup(ENV_USER)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingRequired(ENV_USER.to_string()))?;

        let password = lookup(ENV_PASSWORD).unwrap_or_default();

        let database = lookup(ENV_NAME)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "fruit_store".to_string());

        let mut config = DbConfig::new(username, password, database);

        if let Some(host) = lookup(ENV_HOST).filter(|v| !v.trim().is_empty()) {
            config.host = host;
        }

        if let Some(port) = lookup(ENV_PORT) {
            config.port = parse_value(ENV_PORT, &port)?;
        }

        if let Some(secs) = lookup(ENV_CONNECT_TIMEOUT) {
            config.connect_timeout = Duration::from_secs(parse_value(ENV_CONNECT_TIMEOUT, &secs)?);
        }

        Ok(config)
    }

    /// Connection URL with the password left out, safe for logs.
    pub fn redacted_url(&self) -> String {
        format!(
            "mysql://{}@{}:{}/{}",
            self.username, self.host, self.port, self.database
        )
    }

    /// sqlx connect options for this configuration.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .database(&self.database);

        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .field("connect_timeout", &self.connect_timeout)
            .field("idle_timeout", &self.idle_timeout)
            .finish()
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
