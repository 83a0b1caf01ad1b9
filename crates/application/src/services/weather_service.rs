//! Weather service - the fetch-cache pipeline
//!
//! Resolves weather for a location through the cache first, then the
//! upstream API. Raw bodies are cached only when the decoded snapshot
//! carries no embedded logical error; transport failures cache nothing.

use std::{fmt, sync::Arc};

use domain::value_objects::Location;
use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::{CachePort, CacheStats, ForecastPort, WeatherSnapshot},
};

/// Service resolving weather data via cache or live fetch
pub struct WeatherService {
    forecast: Arc<dyn ForecastPort>,
    cache: Arc<dyn CachePort>,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService").finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new weather service
    pub fn new(forecast: Arc<dyn ForecastPort>, cache: Arc<dyn CachePort>) -> Self {
        Self { forecast, cache }
    }

    /// Resolve the decoded snapshot for a location
    ///
    /// A snapshot is returned for both weather data and embedded logical
    /// errors; only transport and decode failures are `Err`.
    #[instrument(skip(self), fields(location = %location))]
    pub async fn snapshot_for(
        &self,
        location: &Location,
    ) -> Result<WeatherSnapshot, ApplicationError> {
        let (snapshot, _raw) = self.resolve(location).await?;
        Ok(snapshot)
    }

    /// Resolve the raw response body for a location, verbatim
    #[instrument(skip(self), fields(location = %location))]
    pub async fn raw_for(&self, location: &Location) -> Result<String, ApplicationError> {
        let (_snapshot, raw) = self.resolve(location).await?;
        Ok(raw)
    }

    /// Cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    async fn resolve(
        &self,
        location: &Location,
    ) -> Result<(WeatherSnapshot, String), ApplicationError> {
        let key = location.cache_key();

        if let Some(body) = self.cache.get(&key).await? {
            debug!(key = %key, "Cache hit");
            let snapshot = self.forecast.parse(&body)?;
            return Ok((snapshot, body));
        }

        debug!(key = %key, "Cache miss, fetching upstream");
        let body = self.forecast.fetch_raw(location).await?;
        let snapshot = self.forecast.parse(&body)?;

        if snapshot.is_report() {
            self.cache.put(&key, body.clone()).await?;
        } else {
            debug!(key = %key, "Upstream reported an error, not caching");
        }

        Ok((snapshot, body))
    }
}
