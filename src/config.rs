//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `SERVICES` (optional): comma-separated `service:method` pairs to
///   register at startup, e.g. `billing:charge,billing:refund`
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_services")]
    pub services: String,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

/// Default registration list if SERVICES is not set.
fn default_services() -> String {
    "service1:method1,service1:method2,service2:method1".to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values cannot be parsed
    /// into the expected types (e.g. a non-numeric SERVER_PORT).
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Parse environment variables into Config struct
        // Field names are automatically converted: server_port -> SERVER_PORT
        envy::from_env::<Config>()
    }

    /// Parse the SERVICES list into (service, method) pairs.
    ///
    /// Empty entries (trailing commas, doubled commas) are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry is not of the form `service:method`.
    /// Registration happens once at startup, so a malformed list is a
    /// fatal configuration error.
    pub fn service_pairs(&self) -> anyhow::Result<Vec<(String, String)>> {
        self.services
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let (service_id, method) = entry.split_once(':').ok_or_else(|| {
                    anyhow::anyhow!("invalid SERVICES entry {entry:?}, expected service:method")
                })?;
                Ok((service_id.trim().to_owned(), method.trim().to_owned()))
            })
            .collect()
    }
}
