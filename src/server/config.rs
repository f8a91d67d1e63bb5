use std::{str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub database_url: String,
    /// Upper bound on pooled database connections, SeaORM default when unset.
    pub database_max_connections: Option<u32>,
    /// How long a request waits for a pooled connection, SeaORM default when unset.
    pub database_acquire_timeout: Option<Duration>,

    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            database_max_connections: optional("DATABASE_MAX_CONNECTIONS")?,
            database_acquire_timeout: optional::<u64>("DATABASE_ACQUIRE_TIMEOUT_SECS")?
                .map(Duration::from_secs),
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: optional("PORT")?.unwrap_or(DEFAULT_PORT),
        })
    }
}

fn required(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

fn optional<T: FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvVar {
                key: key.to_string(),
                value,
            }),
        Err(_) => Ok(None),
    }
}
