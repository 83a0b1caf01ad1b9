//! Response cache configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache settings for raw forecast bodies
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Time-to-live in minutes (default: 15)
    #[serde(default = "default_ttl_minutes")]
    pub ttl_minutes: u64,

    /// Maximum number of cached locations (default: 1024)
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,
}

const fn default_ttl_minutes() -> u64 {
    15
}

const fn default_max_entries() -> u64 {
    1024
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: default_ttl_minutes(),
            max_entries: default_max_entries(),
        }
    }
}

impl CacheConfig {
    /// The TTL as a Duration
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_minutes * 60)
    }
}
