//! Wire models for the weatherapi.com forecast response
//!
//! The forecast endpoint returns either the forecast shape or an error
//! envelope (`{"error":{"code":…,"message":…}}`). Logical errors such as an
//! unknown location arrive in the envelope, on responses the transport layer
//! treats as successful. Decoding is strict: a body matching neither shape
//! is a parse failure, independent of the logical-error check.

use serde::Deserialize;

use crate::client::WeatherApiError;

/// A decoded response body: forecast data or the error envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiPayload {
    /// Logical error reported by the API
    Error(ErrorEnvelope),
    /// Successful forecast payload
    Forecast(Box<ForecastResponse>),
}

/// Error envelope wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

/// Error details inside the envelope
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    /// Numeric API error code (e.g. 1006 for "no matching location")
    #[serde(default)]
    pub code: Option<i64>,
    /// Human-readable message
    pub message: String,
}

/// Top-level forecast response
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub location: WireLocation,
    pub current: WireCurrent,
    pub forecast: WireForecast,
}

/// Resolved location metadata
#[derive(Debug, Clone, Deserialize)]
pub struct WireLocation {
    pub name: String,
    pub region: String,
    pub tz_id: String,
}

/// Current conditions, temperatures and speeds in both unit systems
#[derive(Debug, Clone, Deserialize)]
pub struct WireCurrent {
    pub temp_c: f64,
    pub temp_f: f64,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub humidity: u8,
    pub wind_mph: f64,
    pub wind_kph: f64,
    pub condition: WireCondition,
    pub last_updated_epoch: i64,
}

/// Condition text and icon URL
#[derive(Debug, Clone, Deserialize)]
pub struct WireCondition {
    pub text: String,
    pub icon: String,
}

/// Forecast container; `days=1` yields a single forecast day
#[derive(Debug, Clone, Deserialize)]
pub struct WireForecast {
    pub forecastday: Vec<WireForecastDay>,
}

/// One forecast day: daily aggregates plus 24 hourly entries
#[derive(Debug, Clone, Deserialize)]
pub struct WireForecastDay {
    pub day: WireDay,
    pub hour: Vec<WireHour>,
}

/// Daily aggregates
#[derive(Debug, Clone, Deserialize)]
pub struct WireDay {
    pub daily_chance_of_rain: u8,
}

/// One hourly forecast entry
#[derive(Debug, Clone, Deserialize)]
pub struct WireHour {
    pub time_epoch: i64,
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: WireCondition,
}

/// Decode a raw body into a payload
///
/// # Errors
///
/// Returns [`WeatherApiError::ParseError`] when the body matches neither
/// the forecast shape nor the error envelope.
pub fn parse_payload(raw: &str) -> Result<ApiPayload, WeatherApiError> {
    serde_json::from_str(raw).map_err(|e| WeatherApiError::ParseError(e.to_string()))
}

/// Check whether a body is the logical-error envelope
///
/// Used by the client to distinguish "HTTP 400 carrying an API error" from
/// a plain transport-level failure.
#[must_use]
pub fn is_error_envelope(raw: &str) -> bool {
    serde_json::from_str::<ErrorEnvelope>(raw).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORECAST_BODY: &str = r#"{
        "location": {"name": "Los Angeles", "region": "California", "tz_id": "America/Los_Angeles"},
        "current": {
            "temp_c": 22.4, "temp_f": 72.3,
            "feelslike_c": 23.7, "feelslike_f": 74.6,
            "humidity": 55,
            "wind_mph": 12.5, "wind_kph": 20.1,
            "condition": {"text": "Partly cloudy", "icon": "//cdn.weatherapi.com/weather/64x64/day/116.png"},
            "last_updated_epoch": 1678129200
        },
        "forecast": {
            "forecastday": [{
                "day": {"daily_chance_of_rain": 20},
                "hour": [
                    {"time_epoch": 1678086000, "temp_c": 15.0, "temp_f": 59.0,
                     "condition": {"text": "Clear", "icon": "//cdn.weatherapi.com/weather/64x64/night/113.png"}},
                    {"time_epoch": 1678089600, "temp_c": 14.5, "temp_f": 58.1,
                     "condition": {"text": "Clear", "icon": "//cdn.weatherapi.com/weather/64x64/night/113.png"}}
                ]
            }]
        }
    }"#;

    const ERROR_BODY: &str = r#"{"error":{"code":1006,"message":"No matching location found."}}"#;

    #[test]
    fn forecast_body_decodes() {
        let payload = parse_payload(FORECAST_BODY).expect("should decode");
        let ApiPayload::Forecast(forecast) = payload else {
            unreachable!("expected forecast payload");
        };
        assert_eq!(forecast.location.name, "Los Angeles");
        assert_eq!(forecast.location.tz_id, "America/Los_Angeles");
        assert!((forecast.current.temp_f - 72.3).abs() < f64::EPSILON);
        assert_eq!(forecast.current.humidity, 55);
        assert_eq!(forecast.forecast.forecastday.len(), 1);
        assert_eq!(forecast.forecast.forecastday[0].day.daily_chance_of_rain, 20);
        assert_eq!(forecast.forecast.forecastday[0].hour.len(), 2);
        assert_eq!(
            forecast.forecast.forecastday[0].hour[0].time_epoch,
            1_678_086_000
        );
    }

    #[test]
    fn error_envelope_decodes() {
        let payload = parse_payload(ERROR_BODY).expect("should decode");
        let ApiPayload::Error(envelope) = payload else {
            unreachable!("expected error payload");
        };
        assert_eq!(envelope.error.code, Some(1006));
        assert_eq!(envelope.error.message, "No matching location found.");
    }

    #[test]
    fn error_envelope_without_code_decodes() {
        let payload = parse_payload(r#"{"error":{"message":"API key is invalid."}}"#)
            .expect("should decode");
        let ApiPayload::Error(envelope) = payload else {
            unreachable!("expected error payload");
        };
        assert_eq!(envelope.error.code, None);
    }

    #[test]
    fn junk_body_is_a_parse_error() {
        let result = parse_payload("not valid json");
        assert!(matches!(result, Err(WeatherApiError::ParseError(_))));
    }

    #[test]
    fn wrong_shape_is_a_parse_error() {
        let result = parse_payload(r#"{"weather":"sunny"}"#);
        assert!(matches!(result, Err(WeatherApiError::ParseError(_))));
    }

    #[test]
    fn envelope_detection() {
        assert!(is_error_envelope(ERROR_BODY));
        assert!(!is_error_envelope(FORECAST_BODY));
        assert!(!is_error_envelope("<html>Bad Gateway</html>"));
    }
}
