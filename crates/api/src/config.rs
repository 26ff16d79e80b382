//! # API Configuration Module
//!
//! Loads server and record store settings from environment variables.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: host address to bind (default: "0.0.0.0")
//! - `API_PORT`: port to listen on (default: 3000)
//! - `LOG_LEVEL`: logging level (default: "info")
//! - `API_CORS_ORIGINS`: comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: per-request timeout (default: 30)
//! - `STORE_BACKEND`: `airtable` (default) or `memory`
//! - `AIRTABLE_API_TOKEN`, `AIRTABLE_BASE_ID`: required for the Airtable backend
//! - `AIRTABLE_API_URL`: API root (default: `https://api.airtable.com/v0`)
//! - `AIRTABLE_BOOKED_TABLE`, `AIRTABLE_CLIENTS_TABLE`,
//!   `AIRTABLE_CONTACTS_TABLE`, `AIRTABLE_TESTIMONIALS_TABLE`: table names
//! - `AIRTABLE_SLOTS_TABLE`: optional per-slot table
//! - `BOOKING_SCHEMA`: `instant` (default) or `fields`

use std::{env, time::Duration};

use coachdesk_store::{
    AirtableConfig, BookingSchema, StoreBackend, Tables, airtable::DEFAULT_API_URL,
};
use eyre::{Result, WrapErr, eyre};
use tracing::Level;

/// Configuration for the CoachDesk API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Which record store to talk to
    pub store_backend: StoreBackend,

    pub tables: Tables,

    pub booking_schema: BookingSchema,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// Fails if:
    /// - `API_PORT` cannot be parsed as a u16
    /// - the Airtable backend is selected without a token or base id
    /// - `STORE_BACKEND` or `BOOKING_SCHEMA` hold an unknown value
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        // Network settings
        let host = var("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = var("API_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Logging settings
        let log_level = match var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = var("API_CORS_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        // Performance settings
        let request_timeout = var("API_REQUEST_TIMEOUT_SECONDS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        // Record store settings
        let store_backend = match var("STORE_BACKEND").as_deref().unwrap_or("airtable") {
            "memory" => StoreBackend::Memory,
            "airtable" => StoreBackend::Airtable(AirtableConfig {
                api_url: var("AIRTABLE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
                api_token: var("AIRTABLE_API_TOKEN")
                    .ok_or_else(|| eyre!("AIRTABLE_API_TOKEN environment variable must be set"))?,
                base_id: var("AIRTABLE_BASE_ID")
                    .ok_or_else(|| eyre!("AIRTABLE_BASE_ID environment variable must be set"))?,
                timeout: Duration::from_secs(request_timeout),
            }),
            other => return Err(eyre!("Unknown STORE_BACKEND value: {}", other)),
        };

        let defaults = Tables::default();
        let tables = Tables {
            booked: var("AIRTABLE_BOOKED_TABLE").unwrap_or(defaults.booked),
            clients: var("AIRTABLE_CLIENTS_TABLE").unwrap_or(defaults.clients),
            contacts: var("AIRTABLE_CONTACTS_TABLE").unwrap_or(defaults.contacts),
            testimonials: var("AIRTABLE_TESTIMONIALS_TABLE").unwrap_or(defaults.testimonials),
            slots: var("AIRTABLE_SLOTS_TABLE"),
        };

        let booking_schema = match var("BOOKING_SCHEMA") {
            Some(value) => value.parse().map_err(|e: String| eyre!(e))?,
            None => BookingSchema::default(),
        };

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            store_backend,
            tables,
            booking_schema,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
