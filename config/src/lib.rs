//! # Configuration for rowforge
//!
//! This crate provides the connection parameter set consumed when opening a
//! database session, and a TOML-backed configuration structure that lowers
//! into those parameters.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use config::DatabaseConfig;
//!
//! let config = DatabaseConfig::from_file("config/production.toml").unwrap();
//! let parameters = config.parameters();
//! ```
//!
//! ```toml
//! [database]
//! host = "localhost"
//! port = 5432
//! database = "myapp"
//! username = "postgres"
//! password = "password"
//! connect_timeout_seconds = 30
//! application_name = "myapp"
//! ssl_mode = "prefer"
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

pub mod parameter;

pub use parameter::{conninfo, ConnectionParameter, SslMode};

const DEFAULT_CONFIG_PATH: &str = "./rowforge.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    #[error("Connection parameter `{0}` was specified more than once")]
    DuplicateParameter(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
    pub connect_timeout_seconds: Option<u32>,
    pub application_name: Option<String>,
    pub ssl_mode: Option<SslMode>,
}

impl AppConfig {
    /// Load configuration from the TOML file named in `ROWFORGE_CONFIG`
    /// (read through a `.env` file if present), falling back to
    /// `./rowforge.toml`.
    pub fn load() -> Result<Self, ConfigError> {
        // .env is optional; a missing file is not an error
        let _ = dotenvy::dotenv();

        if let Ok(config_path) = env::var("ROWFORGE_CONFIG") {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Err(ConfigError::Invalid(format!(
                "Config path must be specified in .env as ROWFORGE_CONFIG or in {}",
                DEFAULT_CONFIG_PATH
            )))
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.database.validate()?;
        Ok(config)
    }
}

impl DatabaseConfig {
    /// Create a new database configuration
    pub fn new(
        host: String,
        port: u16,
        database: String,
        username: String,
        password: String,
    ) -> Self {
        Self {
            host,
            port,
            database,
            username,
            password,
            connect_timeout_seconds: None,
            application_name: None,
            ssl_mode: None,
        }
    }

    /// Load configuration from a TOML file holding a `[database]` table
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Ok(AppConfig::from_file(path)?.database)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::Invalid(
                "Database host cannot be empty".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(ConfigError::Invalid(
                "Database port cannot be zero".to_string(),
            ));
        }
        if self.database.is_empty() {
            return Err(ConfigError::Invalid(
                "Database name cannot be empty".to_string(),
            ));
        }
        if self.username.is_empty() {
            return Err(ConfigError::Invalid(
                "Database username cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Lower this configuration to the connection parameter set.
    pub fn parameters(&self) -> Vec<ConnectionParameter> {
        let mut parameters = vec![
            ConnectionParameter::Host(self.host.clone()),
            ConnectionParameter::Port(self.port),
            ConnectionParameter::DbName(self.database.clone()),
            ConnectionParameter::User(self.username.clone()),
            ConnectionParameter::Password(self.password.clone()),
        ];
        if let Some(timeout) = self.connect_timeout_seconds {
            parameters.push(ConnectionParameter::ConnectTimeout(timeout));
        }
        if let Some(name) = &self.application_name {
            parameters.push(ConnectionParameter::ApplicationName(name.clone()));
        }
        if let Some(mode) = self.ssl_mode {
            parameters.push(ConnectionParameter::SslMode(mode));
        }
        parameters
    }
}
