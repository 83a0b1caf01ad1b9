//! Infrastructure layer for Weatherblock
//!
//! Adapters implementing the application ports: configuration loading, the
//! Moka-backed response cache, the weatherapi.com forecast adapter, and the
//! Tera-backed block renderer.

pub mod adapters;
pub mod cache;
pub mod config;
pub mod templates;

pub use adapters::ForecastAdapter;
pub use cache::MokaWeatherCache;
pub use config::{AppConfig, CacheConfig, ServerConfig, WeatherUpstreamConfig};
pub use templates::{TemplateEngine, TemplateError};
