//! Weather block lifecycle
//!
//! Explicit registration interface for the block: `register` builds a
//! handle from injected ports, failing when the feature is not configured,
//! and the handle exposes the static render path, the raw-data lookup, and
//! the interactive editor. Lifecycle and rendering stay decoupled: the
//! handle owns no global state and can be constructed per composition root.

use std::{fmt, sync::Arc, time::Duration};

use domain::entities::BlockSettings;
use domain::value_objects::Location;
use tracing::instrument;

use crate::{
    error::ApplicationError,
    ports::{BlockRendererPort, CachePort, CacheStats, ForecastPort},
    services::{DEFAULT_DEBOUNCE, EditorSession, WeatherService},
    view::{BlockView, ClockContext, build_block_view},
};

/// Everything needed to register the weather block
pub struct BlockRegistration {
    /// Whether an upstream API key is configured; without one the block
    /// does not register at all
    pub api_key_configured: bool,
    pub forecast: Arc<dyn ForecastPort>,
    pub cache: Arc<dyn CachePort>,
    pub renderer: Arc<dyn BlockRendererPort>,
}

impl fmt::Debug for BlockRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockRegistration")
            .field("api_key_configured", &self.api_key_configured)
            .finish_non_exhaustive()
    }
}

/// Handle to a registered weather block
pub struct WeatherBlock {
    service: Arc<WeatherService>,
    renderer: Arc<dyn BlockRendererPort>,
    debounce: Duration,
}

impl fmt::Debug for WeatherBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherBlock")
            .field("debounce", &self.debounce)
            .finish_non_exhaustive()
    }
}

impl WeatherBlock {
    /// Register the block
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Configuration`] when no API key is
    /// configured; the caller is expected to leave the block (and its
    /// endpoints) unregistered in that case.
    pub fn register(registration: BlockRegistration) -> Result<Self, ApplicationError> {
        if !registration.api_key_configured {
            return Err(ApplicationError::Configuration(
                "weather API key is not configured; block is disabled".to_string(),
            ));
        }
        Ok(Self {
            service: Arc::new(WeatherService::new(
                registration.forecast,
                registration.cache,
            )),
            renderer: registration.renderer,
            debounce: DEFAULT_DEBOUNCE,
        })
    }

    /// Raw weather body for the data endpoint, cached-or-fetched
    pub async fn weather_data(&self, location: &Location) -> Result<String, ApplicationError> {
        self.service.raw_for(location).await
    }

    /// Render the block for static page output
    ///
    /// Transport, rate-limit, and decode failures render the generic
    /// apology markup; only renderer failures surface as errors.
    #[instrument(skip(self, settings), fields(location = %settings.location))]
    pub async fn render(
        &self,
        settings: &BlockSettings,
        now_epoch: i64,
        clock: ClockContext,
    ) -> Result<String, ApplicationError> {
        let view = match settings.location() {
            Err(_) => BlockView::MissingLocation,
            Ok(location) => match self.service.snapshot_for(&location).await {
                Ok(snapshot) => build_block_view(settings, Some(&snapshot), now_epoch, clock),
                Err(
                    ApplicationError::Upstream(_)
                    | ApplicationError::RateLimited
                    | ApplicationError::Parse(_),
                ) => BlockView::Unavailable,
                Err(other) => return Err(other),
            },
        };
        self.renderer.render_block(&view)
    }

    /// Render an already-built view
    ///
    /// Editor hosts pair this with [`EditorSession::preview`] so the
    /// preview and the published output share one rendering path.
    pub fn render_view(&self, view: &BlockView) -> Result<String, ApplicationError> {
        self.renderer.render_block(view)
    }

    /// Open an interactive editor session over the given settings
    #[must_use]
    pub fn open_editor(&self, settings: BlockSettings) -> EditorSession {
        EditorSession::new(Arc::clone(&self.service), settings, self.debounce)
    }

    /// Cache statistics for the readiness endpoint
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.service.stats()
    }
}
