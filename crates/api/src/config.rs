//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the appointment API
//! server. Values come from environment variables, with defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 8080)
//! - `APPOINTMENT_STORE`: Backing store, `postgres` or `memory` (default: "postgres")
//! - `DATABASE_URL`: PostgreSQL connection string (required for the `postgres` store)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `CLINIC_TIMEZONE`: Zone label reported by the health check (default: "America/Lima")

use eyre::{Result, WrapErr, eyre};
use std::{env, str::FromStr};
use tracing::Level;

/// Which gateway implementation backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl FromStr for StoreKind {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            "memory" | "in-memory" => Ok(StoreKind::Memory),
            other => Err(eyre!("Unknown APPOINTMENT_STORE value: {other}")),
        }
    }
}

/// Configuration for the appointment API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use dental_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}", config.server_addr());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Backing store selection
    pub store: StoreKind,

    /// PostgreSQL database connection string, present whenever `store` is `Postgres`
    pub database_url: Option<String>,

    /// Log level for the application
    pub log_level: Level,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Fixed time zone label of the clinic. Stored and reported, never converted.
    pub clinic_timezone: String,
}

impl ApiConfig {
    /// Creates a new ApiConfig from the process environment
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The API_PORT value cannot be parsed as a u16
    /// - The APPOINTMENT_STORE value is not recognised
    /// - The store is `postgres` and DATABASE_URL is not set
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Creates a new ApiConfig from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Network settings
        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("API_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Storage settings
        let store = match lookup("APPOINTMENT_STORE") {
            Some(value) => value.parse()?,
            None => StoreKind::Postgres,
        };
        let database_url = lookup("DATABASE_URL");
        if store == StoreKind::Postgres && database_url.is_none() {
            return Err(eyre!(
                "DATABASE_URL environment variable must be set when APPOINTMENT_STORE is postgres"
            ));
        }

        // Logging settings
        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // Performance settings
        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .and_then(|value| value.parse().ok())
            .unwrap_or(30);

        let clinic_timezone =
            lookup("CLINIC_TIMEZONE").unwrap_or_else(|| "America/Lima".to_string());

        Ok(Self {
            host,
            port,
            store,
            database_url,
            log_level,
            request_timeout,
            clinic_timezone,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:8080")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
