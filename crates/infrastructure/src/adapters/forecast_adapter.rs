//! Forecast adapter - Implements ForecastPort using integration_weatherapi
//!
//! Fetching returns the raw body untouched; decoding maps the wire shape
//! onto the application snapshot. The embedded-error envelope decodes to an
//! error snapshot, while a body matching neither shape is a parse failure.

use application::error::ApplicationError;
use application::ports::{
    Condition, CurrentConditions, DayForecast, DualSpeed, DualTemperature, ForecastPort,
    HourlyEntry, Place, UpstreamApiError, WeatherReport, WeatherSnapshot,
};
use async_trait::async_trait;
use domain::value_objects::{Location, Timezone};
use integration_weatherapi::{
    ApiPayload, ForecastResponse, WeatherApiClient, WeatherApiConfig, WeatherApiError,
    WireCondition, parse_payload,
};
use tracing::{debug, instrument};

/// Adapter for the weatherapi.com forecast endpoint
pub struct ForecastAdapter {
    client: WeatherApiClient,
}

impl std::fmt::Debug for ForecastAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastAdapter").finish_non_exhaustive()
    }
}

impl ForecastAdapter {
    /// Create a new adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: WeatherApiConfig) -> Result<Self, ApplicationError> {
        let client =
            WeatherApiClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration errors to application errors
    fn map_error(err: WeatherApiError) -> ApplicationError {
        match err {
            WeatherApiError::ConnectionFailed(e)
            | WeatherApiError::RequestFailed(e)
            | WeatherApiError::ServiceUnavailable(e) => ApplicationError::Upstream(e),
            WeatherApiError::ParseError(e) => ApplicationError::Parse(e),
            WeatherApiError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    /// Map the wire forecast onto the application report
    fn map_report(response: ForecastResponse) -> Result<WeatherReport, ApplicationError> {
        let mut days = response.forecast.forecastday.into_iter();
        let today = days.next().ok_or_else(|| {
            ApplicationError::Parse("forecast contains no days".to_string())
        })?;

        Ok(WeatherReport {
            place: Place {
                name: response.location.name,
                region: response.location.region,
                timezone: Timezone::new(response.location.tz_id),
            },
            current: CurrentConditions {
                temperature: DualTemperature {
                    fahrenheit: response.current.temp_f,
                    celsius: response.current.temp_c,
                },
                feels_like: DualTemperature {
                    fahrenheit: response.current.feelslike_f,
                    celsius: response.current.feelslike_c,
                },
                humidity: response.current.humidity,
                wind: DualSpeed {
                    mph: response.current.wind_mph,
                    kph: response.current.wind_kph,
                },
                condition: Self::map_condition(response.current.condition),
                last_updated_epoch: response.current.last_updated_epoch,
            },
            today: DayForecast {
                chance_of_rain: today.day.daily_chance_of_rain,
                hourly: today
                    .hour
                    .into_iter()
                    .map(|hour| HourlyEntry {
                        epoch: hour.time_epoch,
                        temperature: DualTemperature {
                            fahrenheit: hour.temp_f,
                            celsius: hour.temp_c,
                        },
                        condition: Self::map_condition(hour.condition),
                    })
                    .collect(),
            },
        })
    }

    fn map_condition(condition: WireCondition) -> Condition {
        Condition {
            text: condition.text,
            icon: condition.icon,
        }
    }
}

#[async_trait]
impl ForecastPort for ForecastAdapter {
    #[instrument(skip(self), fields(location = %location))]
    async fn fetch_raw(&self, location: &Location) -> Result<String, ApplicationError> {
        let result = self.client.fetch_forecast(location.as_str()).await;
        if let Err(ref error) = result {
            debug!(error = %error, "Forecast fetch failed");
        }
        result.map_err(Self::map_error)
    }

    fn parse(&self, raw: &str) -> Result<WeatherSnapshot, ApplicationError> {
        match parse_payload(raw).map_err(Self::map_error)? {
            ApiPayload::Error(envelope) => Ok(WeatherSnapshot::ApiError(UpstreamApiError {
                message: envelope.error.message,
            })),
            ApiPayload::Forecast(response) => {
                Ok(WeatherSnapshot::Report(Box::new(Self::map_report(*response)?)))
            }
        }
    }
}
