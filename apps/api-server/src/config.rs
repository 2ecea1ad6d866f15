//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use blog_infra::database::DatabaseConfig;
use thiserror::Error;

/// Configuration errors - fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} env variable missing")]
    MissingVar(&'static str),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Deadline for handling a single request.
    pub request_timeout: Duration,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        #[cfg(feature = "mongodb")]
        let database = Some(Self::database_config(&lookup)?);

        #[cfg(not(feature = "mongodb"))]
        let database = None;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            request_timeout: Duration::from_secs(
                lookup("REQUEST_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(600),
            ),
            database,
        })
    }

    /// Store settings. Credentials are required; everything else has a default.
    #[cfg_attr(not(feature = "mongodb"), allow(dead_code))]
    fn database_config(
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<DatabaseConfig, ConfigError> {
        let username = lookup("DB_USERNAME").ok_or(ConfigError::MissingVar("DB_USERNAME"))?;
        let password = lookup("DB_PASSWORD").ok_or(ConfigError::MissingVar("DB_PASSWORD"))?;

        Ok(DatabaseConfig {
            host: lookup("DB_HOST").unwrap_or_else(|| "host.docker.internal".to_string()),
            port: lookup("DB_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(27017),
            username,
            password,
            database: lookup("DB_NAME").unwrap_or_else(|| "blog".to_string()),
            collection: lookup("DB_COLLECTION").unwrap_or_else(|| "posts".to_string()),
            connect_timeout: Duration::from_secs(
                lookup("DB_CONNECT_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
        })
    }
}
