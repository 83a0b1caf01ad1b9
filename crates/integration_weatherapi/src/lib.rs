//! weatherapi.com forecast integration
//!
//! Client for the WeatherAPI forecast endpoint (<https://www.weatherapi.com>).
//! Fetches a one-day forecast for a free-form location query and exposes the
//! raw response body plus typed decoding of its shape.

pub mod client;
pub mod models;

pub use client::{WeatherApiClient, WeatherApiConfig, WeatherApiError};
pub use models::{
    ApiPayload, ErrorBody, ErrorEnvelope, ForecastResponse, WireCondition, WireCurrent, WireDay,
    WireForecast, WireForecastDay, WireHour, WireLocation, parse_payload,
};
