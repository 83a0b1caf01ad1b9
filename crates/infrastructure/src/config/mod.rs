//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `server`: HTTP server settings
//! - `weather`: upstream weather API settings (including the API key)
//! - `cache`: response cache TTL and capacity
//!
//! Configuration is loaded from an optional `weatherblock.toml` file with
//! `WEATHERBLOCK_`-prefixed environment variables layered on top
//! (`WEATHERBLOCK_WEATHER__API_KEY`, `WEATHERBLOCK_SERVER__PORT`, ...).

mod cache;
mod server;
mod weather;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

pub use cache::CacheConfig;
pub use server::ServerConfig;
pub use weather::WeatherUpstreamConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream weather API configuration
    #[serde(default)]
    pub weather: WeatherUpstreamConfig,

    /// Response cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Load configuration from `weatherblock.toml` and the environment
    ///
    /// # Errors
    ///
    /// Returns an error when a source is malformed or a value fails to
    /// deserialize. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("weatherblock")
    }

    /// Load configuration from a named file plus the environment
    ///
    /// # Errors
    ///
    /// Returns an error when a source is malformed or a value fails to
    /// deserialize.
    pub fn load_from(basename: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(basename).required(false))
            .add_source(Environment::with_prefix("WEATHERBLOCK").separator("__"))
            .build()?
            .try_deserialize()
    }
}
