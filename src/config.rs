//! Runtime settings from environment. `.env` is loaded by the binary before this runs.

use crate::error::ConfigError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
}

impl Settings {
    /// Read settings from `DATABASE_URL`, `BIND_ADDR`, `MAX_CONNECTIONS`.
    /// Only `DATABASE_URL` is required.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let max_connections = match std::env::var("MAX_CONNECTIONS") {
            Ok(s) => s.parse().map_err(|_| ConfigError::InvalidVar {
                name: "MAX_CONNECTIONS",
                reason: format!("'{}' is not a positive integer", s),
            })?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };
        Ok(Settings {
            database_url,
            bind_addr,
            max_connections,
        })
    }
}
