//! Cache port definition
//!
//! Short-lived store for raw upstream response bodies, keyed by the
//! location cache key. Shields the upstream API from repeated calls.
//!
//! Entries are immutable once written: a new fetch replaces the entry
//! wholesale, and staleness is purely time-based. Implementations may evict
//! lazily or sweep in the background, as long as nothing older than the TTL
//! is ever returned from `get`.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Cache port for raw forecast bodies
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CachePort: Send + Sync {
    /// Get a cached body by key
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError>;

    /// Store a body under a key, replacing any existing entry
    async fn put(&self, key: &str, body: String) -> Result<(), ApplicationError>;

    /// Get cache statistics (hits, misses, size)
    fn stats(&self) -> CacheStats;
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Current number of entries
    pub entries: u64,
}

impl CacheStats {
    /// Calculate the hit rate as a fraction (0.0 - 1.0)
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
