//! Application state shared across handlers

use std::sync::Arc;

use application::WeatherBlock;
use infrastructure::AppConfig;

/// Shared application state
///
/// `block` is `None` when no API key is configured; the block routes are
/// not mounted in that case and only the health endpoints respond.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The registered weather block, if the feature is enabled
    pub block: Option<Arc<WeatherBlock>>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
