//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

const DB_FILE_NAME: &str = "orders.db";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name} must be greater than zero")]
    Zero { name: &'static str },
}

/// Server and store configuration.
///
/// Reads from environment variables:
/// - `HOST`: bind address (default `0.0.0.0`)
/// - `PORT`: listen port (default `8000`)
/// - `DATABASE_URL`: SQLite file path; when unset the store lives at
///   `$ORDERS_HOME/orders.db`, then `$HOME/orders.db`, then `./orders.db`
/// - `DB_POOL_SIZE`: maximum pooled connections (default `8`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub pool_size: u32,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup so callers (and tests) can
    /// inject values without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidNumber { name: "PORT", value })?,
            None => defaults.port,
        };
        let pool_size = match lookup("DB_POOL_SIZE") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidNumber {
                name: "DB_POOL_SIZE",
                value,
            })?,
            None => defaults.pool_size,
        };
        // r2d2 asserts on an empty pool rather than returning an error.
        if pool_size == 0 {
            return Err(ConfigError::Zero {
                name: "DB_POOL_SIZE",
            });
        }
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| {
            let home = lookup("ORDERS_HOME").or_else(|| lookup("HOME"));
            database_path(home.as_deref())
        });

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            database_url,
            pool_size,
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            database_url: database_path(None),
            pool_size: 8,
        }
    }
}

fn database_path(home: Option<&str>) -> String {
    let dir = home.map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    dir.join(DB_FILE_NAME).to_string_lossy().into_owned()
}
