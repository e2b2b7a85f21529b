//! Application configuration management.
//!
//! Configuration is loaded once at startup from environment variables
//! (after reading an optional `.env` file). Empty or whitespace-only values
//! are treated as unset.
//!
//! # Environment Variables
//!
//! - `STORAGE_MODE`: `in_memory` | `postgres` (default: `postgres` when
//!   `DATABASE_URL` is set, otherwise `in_memory`)
//! - `DATABASE_URL`: `PostgreSQL` connection URL (required when `STORAGE_MODE=postgres`)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: `5`)
//! - `HOST`: Server host address (default: `0.0.0.0`)
//! - `PORT`: Server port (default: `3000`)
//! - `TODO_LEGACY_CREATE_STATUS`: answer create validation failures with 404 (default: `false`)
//! - `LOG_FORMAT`: `pretty` (default) | `json`

use std::env;
use std::str::FromStr;

use thiserror::Error;

// =============================================================================
// Configuration Error
// =============================================================================

/// Errors raised while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Invalid storage mode: {0} (expected in_memory or postgres)")]
    InvalidStorageMode(String),

    #[error("Invalid log format: {0} (expected pretty or json)")]
    InvalidLogFormat(String),

    #[error("DATABASE_URL is required when STORAGE_MODE=postgres")]
    MissingDatabaseUrl,

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

// =============================================================================
// Configuration Types
// =============================================================================

/// Where todos are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageMode {
    /// Process-local storage, lost on restart.
    #[default]
    InMemory,
    /// `PostgreSQL` via `DATABASE_URL`.
    Postgres,
}

impl FromStr for StorageMode {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "in_memory" | "inmemory" | "memory" => Ok(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            _ => Err(ConfigurationError::InvalidStorageMode(value.to_string())),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(ConfigurationError::InvalidLogFormat(value.to_string())),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_mode: StorageMode,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    /// Answer create-validation failures with 404 instead of 400.
    pub legacy_create_status: bool,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_mode: StorageMode::default(),
            database_url: None,
            database_max_connections: 5,
            host: "0.0.0.0".to_string(),
            port: 3000,
            legacy_create_status: false,
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if a variable holds an invalid value
    /// or `DATABASE_URL` is missing in postgres mode.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };
        let defaults = Self::default();
        let database_url = value("DATABASE_URL");
        // A bare DATABASE_URL selects postgres unless STORAGE_MODE says otherwise.
        let implied_storage_mode = if database_url.is_some() {
            StorageMode::Postgres
        } else {
            defaults.storage_mode
        };

        let config = Self {
            storage_mode: value("STORAGE_MODE")
                .map(|raw| raw.parse::<StorageMode>())
                .transpose()?
                .unwrap_or(implied_storage_mode),
            database_url,
            database_max_connections: parse_value(
                "DATABASE_MAX_CONNECTIONS",
                value("DATABASE_MAX_CONNECTIONS"),
            )?
            .unwrap_or(defaults.database_max_connections),
            host: value("HOST").unwrap_or(defaults.host),
            port: parse_value("PORT", value("PORT"))?.unwrap_or(defaults.port),
            legacy_create_status: value("TODO_LEGACY_CREATE_STATUS")
                .map(|raw| parse_flag("TODO_LEGACY_CREATE_STATUS", &raw))
                .transpose()?
                .unwrap_or(defaults.legacy_create_status),
            log_format: value("LOG_FORMAT")
                .map(|raw| raw.parse::<LogFormat>())
                .transpose()?
                .unwrap_or(defaults.log_format),
        };

        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field requirements.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingDatabaseUrl`] in postgres mode
    /// without a database URL.
    pub const fn validate(&self) -> Result<(), ConfigurationError> {
        if matches!(self.storage_mode, StorageMode::Postgres) && self.database_url.is_none() {
            return Err(ConfigurationError::MissingDatabaseUrl);
        }
        Ok(())
    }

    /// Returns the `host:port` string to bind.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_value<T>(key: &str, raw: Option<String>) -> Result<Option<T>, ConfigurationError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.map(|raw| {
        raw.parse().map_err(|error: T::Err| ConfigurationError::InvalidValue {
            key: key.to_string(),
            message: error.to_string(),
        })
    })
    .transpose()
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, ConfigurationError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigurationError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a boolean, got '{raw}'"),
        }),
    }
}

// =============================================================================
// Tests
// =============================================================================
