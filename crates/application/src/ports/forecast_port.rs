//! Forecast port
//!
//! Defines the interface for fetching and decoding upstream weather data.
//! The raw response body is kept alongside the decoded snapshot: the data
//! endpoint serves it verbatim and the cache stores it unmodified.

use async_trait::async_trait;
use domain::value_objects::{Location, SpeedUnit, TemperatureUnit, Timezone};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// A decoded fetch result for one location at one point in time
///
/// The upstream API reports logical failures (unknown location, bad key)
/// inside an otherwise-successful response. Those decode to the `ApiError`
/// variant, which carries only a message and can never be rendered as
/// weather data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WeatherSnapshot {
    /// Renderable weather data
    Report(Box<WeatherReport>),
    /// Logical upstream failure embedded in the response body
    ApiError(UpstreamApiError),
}

impl WeatherSnapshot {
    /// Whether this snapshot holds renderable weather data
    #[must_use]
    pub const fn is_report(&self) -> bool {
        matches!(self, Self::Report(_))
    }

    /// The embedded error message, if any
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Report(_) => None,
            Self::ApiError(err) => Some(&err.message),
        }
    }
}

/// Logical error reported by the upstream API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamApiError {
    /// Message surfaced verbatim to the user
    pub message: String,
}

/// Successful weather data for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Resolved place metadata
    pub place: Place,
    /// Current conditions
    pub current: CurrentConditions,
    /// Today's forecast
    pub today: DayForecast,
}

/// Resolved place metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    /// Place name as resolved by the upstream API
    pub name: String,
    /// Region or state
    pub region: String,
    /// IANA timezone of the place
    pub timezone: Timezone,
}

/// A temperature carried in both display units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualTemperature {
    pub fahrenheit: f64,
    pub celsius: f64,
}

impl DualTemperature {
    /// The value in the requested display unit
    #[must_use]
    pub const fn in_unit(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Fahrenheit => self.fahrenheit,
            TemperatureUnit::Celsius => self.celsius,
        }
    }
}

/// A wind speed carried in both display units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualSpeed {
    pub mph: f64,
    pub kph: f64,
}

impl DualSpeed {
    /// The value in the requested display unit
    #[must_use]
    pub const fn in_unit(&self, unit: SpeedUnit) -> f64 {
        match unit {
            SpeedUnit::Mph => self.mph,
            SpeedUnit::Kph => self.kph,
        }
    }
}

/// Weather condition text and icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Human-readable condition, e.g. "Partly cloudy"
    pub text: String,
    /// Icon URL provided by the upstream API
    pub icon: String,
}

/// Current conditions at the resolved place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: DualTemperature,
    pub feels_like: DualTemperature,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    pub wind: DualSpeed,
    pub condition: Condition,
    /// When the upstream last observed these conditions (epoch seconds)
    pub last_updated_epoch: i64,
}

/// Today's forecast: rain chance plus the hourly sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    /// Chance of rain percentage (0-100)
    pub chance_of_rain: u8,
    /// Hourly entries in upstream order (one per hour of the day)
    pub hourly: Vec<HourlyEntry>,
}

/// One hourly forecast entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyEntry {
    /// Start of the hour (epoch seconds)
    pub epoch: i64,
    pub temperature: DualTemperature,
    pub condition: Condition,
}

/// Port for fetching and decoding upstream forecast data
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch the raw forecast body for a location
    ///
    /// Transport failures (network error, timeout, non-2xx without a
    /// recognizable body) are errors. A response that carries an embedded
    /// logical error is transport *success*; the error surfaces in
    /// [`ForecastPort::parse`].
    async fn fetch_raw(&self, location: &Location) -> Result<String, ApplicationError>;

    /// Decode a raw body into a snapshot
    ///
    /// Fails with [`ApplicationError::Parse`] when the body matches neither
    /// the forecast shape nor the error envelope.
    fn parse(&self, raw: &str) -> Result<WeatherSnapshot, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn ForecastPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ForecastPort>();
    }

    #[test]
    fn dual_temperature_selects_unit() {
        let temp = DualTemperature {
            fahrenheit: 72.5,
            celsius: 22.5,
        };
        assert!((temp.in_unit(TemperatureUnit::Fahrenheit) - 72.5).abs() < f64::EPSILON);
        assert!((temp.in_unit(TemperatureUnit::Celsius) - 22.5).abs() < f64::EPSILON);
    }

    #[test]
    fn dual_speed_selects_unit() {
        let wind = DualSpeed {
            mph: 10.0,
            kph: 16.1,
        };
        assert!((wind.in_unit(SpeedUnit::Mph) - 10.0).abs() < f64::EPSILON);
        assert!((wind.in_unit(SpeedUnit::Kph) - 16.1).abs() < f64::EPSILON);
    }

    #[test]
    fn snapshot_error_accessors() {
        let err = WeatherSnapshot::ApiError(UpstreamApiError {
            message: "No matching location found.".to_string(),
        });
        assert!(!err.is_report());
        assert_eq!(err.error_message(), Some("No matching location found."));
    }

    #[test]
    fn snapshot_report_has_no_error() {
        let report = WeatherSnapshot::Report(Box::new(WeatherReport {
            place: Place {
                name: "Austin".to_string(),
                region: "Texas".to_string(),
                timezone: Timezone::new("America/Chicago"),
            },
            current: CurrentConditions {
                temperature: DualTemperature {
                    fahrenheit: 80.0,
                    celsius: 26.7,
                },
                feels_like: DualTemperature {
                    fahrenheit: 83.0,
                    celsius: 28.3,
                },
                humidity: 40,
                wind: DualSpeed {
                    mph: 5.0,
                    kph: 8.0,
                },
                condition: Condition {
                    text: "Sunny".to_string(),
                    icon: "//cdn.weatherapi.com/weather/64x64/day/113.png".to_string(),
                },
                last_updated_epoch: 1_678_129_200,
            },
            today: DayForecast {
                chance_of_rain: 0,
                hourly: vec![],
            },
        }));
        assert!(report.is_report());
        assert_eq!(report.error_message(), None);
    }
}
