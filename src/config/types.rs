//! Runtime configuration types.

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

/// Deployment environment. Selects which database the service talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidValue {
                key: "BOOKS_ENV",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: Environment,
    /// Connection string of the database selected by `environment`.
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
}
