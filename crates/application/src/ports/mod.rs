//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod cache_port;
mod forecast_port;
mod renderer_port;

#[cfg(test)]
pub use cache_port::MockCachePort;
pub use cache_port::{CachePort, CacheStats};
#[cfg(test)]
pub use forecast_port::MockForecastPort;
pub use forecast_port::{
    Condition, CurrentConditions, DayForecast, DualSpeed, DualTemperature, ForecastPort,
    HourlyEntry, Place, UpstreamApiError, WeatherReport, WeatherSnapshot,
};
pub use renderer_port::BlockRendererPort;
