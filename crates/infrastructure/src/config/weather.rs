//! Upstream weather API configuration

use integration_weatherapi::WeatherApiConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// weatherapi.com settings
///
/// The API key is the single secret of the whole feature: without it the
/// block does not register and its endpoints are not mounted.
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherUpstreamConfig {
    /// API key (sensitive - uses `SecretString`, never serialized)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// WeatherAPI base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for WeatherUpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherUpstreamConfig")
            .field(
                "api_key",
                &self.api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.weatherapi.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherUpstreamConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl WeatherUpstreamConfig {
    /// Whether a non-empty API key is configured
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().is_empty())
    }

    /// Convert to the integration client's configuration
    ///
    /// Returns `None` when no API key is configured.
    #[must_use]
    pub fn to_client_config(&self) -> Option<WeatherApiConfig> {
        if !self.is_configured() {
            return None;
        }
        let api_key = self.api_key.as_ref()?.expose_secret().to_string();
        Some(WeatherApiConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            ..WeatherApiConfig::with_api_key(api_key)
        })
    }
}
