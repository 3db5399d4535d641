//! Server configuration from environment variables.

use larder_core::{AutofillConfig, ConfigError};
use std::env;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub autofill: AutofillConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `DATABASE_URL`: PostgreSQL connection string
    ///
    /// Optional:
    /// - `LARDER_BIND_ADDR`: listen address (default: "0.0.0.0:3000")
    /// - everything read by [`AutofillConfig::from_env`]
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr =
            env::var("LARDER_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            database_url,
            bind_addr,
            autofill: AutofillConfig::from_env()?,
        })
    }
}
