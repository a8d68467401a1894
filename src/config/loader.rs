//! Load configuration from environment variables.

use crate::config::types::{AppConfig, Environment};
use crate::error::ConfigError;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/books";
pub const DEFAULT_TEST_DATABASE_URL: &str = "postgres://localhost/books_test";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

impl AppConfig {
    /// Read `BOOKS_ENV`, `DATABASE_URL`, `TEST_DATABASE_URL`, `BIND_ADDR` and
    /// `DATABASE_MAX_CONNECTIONS` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("BOOKS_ENV") {
            Some(v) => v.parse()?,
            None => Environment::Development,
        };

        let database_url = match environment {
            Environment::Test => lookup("TEST_DATABASE_URL").unwrap_or_else(|| DEFAULT_TEST_DATABASE_URL.into()),
            Environment::Development | Environment::Production => {
                lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into())
            }
        };

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::InvalidValue {
            key: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => match v.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "DATABASE_MAX_CONNECTIONS",
                        value: v,
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(AppConfig {
            environment,
            database_url,
            bind_addr,
            max_connections,
        })
    }
}
