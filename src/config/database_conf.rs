use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// Postgres configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Postgres connection URL
    pub url: String,
    /// Connection pool size
    pub pool_size: u32,
    /// Connection acquire timeout in seconds
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Load database configuration from environment variables
    ///
    /// Expected environment variables:
    /// - DATABASE_URL: Postgres connection URL (required)
    /// - DATABASE_POOL_SIZE: Connection pool size (defaults to 10)
    /// - DATABASE_ACQUIRE_TIMEOUT: Acquire timeout in seconds (defaults to 5)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading database configuration from environment variables");

        let url = env::var("DATABASE_URL").map_err(|_| {
            error!("DATABASE_URL environment variable not found");
            ConfigError::EnvVarNotFound("DATABASE_URL".to_string())
        })?;
        debug!("Database URL loaded");

        let pool_size = env::var("DATABASE_POOL_SIZE")
            .unwrap_or_else(|_| {
                warn!("DATABASE_POOL_SIZE not set, using default: 10");
                "10".to_string()
            })
            .parse::<u32>()
            .map_err(|_| {
                error!("Invalid DATABASE_POOL_SIZE value");
                ConfigError::InvalidValue("Invalid DATABASE_POOL_SIZE value".to_string())
            })?;
        debug!("Database pool size: {}", pool_size);

        let acquire_timeout_secs = env::var("DATABASE_ACQUIRE_TIMEOUT")
            .unwrap_or_else(|_| {
                warn!("DATABASE_ACQUIRE_TIMEOUT not set, using default: 5 seconds");
                "5".to_string()
            })
            .parse::<u64>()
            .map_err(|_| {
                error!("Invalid DATABASE_ACQUIRE_TIMEOUT value");
                ConfigError::InvalidValue("Invalid DATABASE_ACQUIRE_TIMEOUT value".to_string())
            })?;
        debug!("Database acquire timeout: {} seconds", acquire_timeout_secs);

        let config = DatabaseConfig {
            url,
            pool_size,
            acquire_timeout_secs,
        };

        config.validate()?;
        info!("Database configuration loaded successfully");
        Ok(config)
    }

    /// Create DatabaseConfig for testing
    pub fn from_test_env() -> Self {
        DatabaseConfig {
            url: "postgres://localhost:5432/gestelec_test".to_string(),
            pool_size: 2,
            acquire_timeout_secs: 2,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            error!("Database URL is empty");
            return Err(ConfigError::ValidationError(
                "Database URL cannot be empty".to_string(),
            ));
        }
        if !self.url.starts_with("postgres://") && !self.url.starts_with("postgresql://") {
            error!("Database URL is not a Postgres URL");
            return Err(ConfigError::ValidationError(
                "Database URL must start with postgres:// or postgresql://".to_string(),
            ));
        }
        if self.pool_size == 0 {
            error!("Database pool size is 0");
            return Err(ConfigError::ValidationError(
                "Database pool size must be greater than 0".to_string(),
            ));
        }
        if self.acquire_timeout_secs == 0 {
            error!("Database acquire timeout is 0");
            return Err(ConfigError::ValidationError(
                "Database acquire timeout must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            url: "postgres://localhost:5432/gestelec".to_string(),
            pool_size: 10,
            acquire_timeout_secs: 5,
        }
    }
}
