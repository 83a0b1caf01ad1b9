//! weatherapi.com HTTP client
//!
//! Fetches the forecast endpoint and returns the raw response body. The
//! location query is passed through as the `q` parameter; reqwest handles
//! URL escaping. Timeouts use the client-wide default configured at
//! construction and are reported as connection failures.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherApiError {
    /// Connection to the weather service failed (network error or timeout)
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherApiConfig {
    /// WeatherAPI base URL (default: <https://api.weatherapi.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `key` query parameter
    pub api_key: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Number of forecast days requested (default: 1)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

fn default_base_url() -> String {
    "https://api.weatherapi.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

const fn default_forecast_days() -> u8 {
    1
}

impl WeatherApiConfig {
    /// Configuration with defaults for everything but the key
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: api_key.into(),
            timeout_secs: default_timeout(),
            forecast_days: default_forecast_days(),
        }
    }
}

/// WeatherAPI HTTP client
pub struct WeatherApiClient {
    client: Client,
    config: WeatherApiConfig,
}

impl std::fmt::Debug for WeatherApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApiClient")
            .field("base_url", &self.config.base_url)
            .field("forecast_days", &self.config.forecast_days)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl WeatherApiClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherApiConfig) -> Result<Self, WeatherApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherApiError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Fetch the forecast body for a location query
    ///
    /// Returns the raw body on transport success. The API reports logical
    /// errors (unknown location, bad key) as non-2xx responses carrying the
    /// error envelope; those bodies are returned as success so the caller
    /// can surface the embedded message. Any other non-2xx is a failure.
    #[instrument(skip(self), fields(query = %query))]
    pub async fn fetch_forecast(&self, query: &str) -> Result<String, WeatherApiError> {
        let url = format!("{}/forecast.json", self.config.base_url);
        debug!(url = %url, "Fetching forecast");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("aqi", "no"),
                ("days", &self.config.forecast_days.to_string()),
                ("alerts", "no"),
                ("q", query),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    WeatherApiError::ConnectionFailed(e.to_string())
                } else {
                    WeatherApiError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherApiError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherApiError::ServiceUnavailable(format!(
                "HTTP {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WeatherApiError::RequestFailed(e.to_string()))?;

        if !status.is_success() && !models::is_error_envelope(&body) {
            return Err(WeatherApiError::RequestFailed(format!("HTTP {status}")));
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = WeatherApiConfig::with_api_key("secret");
        assert_eq!(config.base_url, "https://api.weatherapi.com/v1");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.forecast_days, 1);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: WeatherApiConfig =
            serde_json::from_str(r#"{"api_key":"secret"}"#).expect("should deserialize");
        assert_eq!(config.base_url, "https://api.weatherapi.com/v1");
        assert_eq!(config.forecast_days, 1);
    }

    #[test]
    fn client_creation() {
        let client = WeatherApiClient::new(WeatherApiConfig::with_api_key("secret"));
        assert!(client.is_ok());
    }

    #[test]
    fn debug_redacts_the_api_key() {
        let client = WeatherApiClient::new(WeatherApiConfig::with_api_key("secret"))
            .expect("client creation should succeed");
        let debug = format!("{client:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn error_display() {
        let err = WeatherApiError::RateLimitExceeded;
        assert!(err.to_string().contains("Rate limit"));

        let err = WeatherApiError::ServiceUnavailable("HTTP 503".to_string());
        assert!(err.to_string().contains("HTTP 503"));
    }
}
