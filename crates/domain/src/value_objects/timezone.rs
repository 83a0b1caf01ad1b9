//! Timezone value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A timezone identifier (IANA timezone name)
///
/// The upstream API reports the resolved location's timezone as a `tz_id`
/// string (e.g. `America/Los_Angeles`). This wrapper does not validate
/// against the IANA database; resolution happens at render time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timezone(String);

impl Timezone {
    /// Create a new timezone
    #[must_use]
    pub fn new(tz: impl Into<String>) -> Self {
        Self(tz.into())
    }

    /// Get the timezone string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is a UTC timezone
    #[must_use]
    pub fn is_utc(&self) -> bool {
        matches!(self.0.as_str(), "UTC" | "Etc/UTC" | "Etc/GMT")
    }

    /// UTC timezone
    #[must_use]
    pub fn utc() -> Self {
        Self("UTC".to_string())
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Timezone {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Timezone {
    fn from(s: String) -> Self {
        Self(s)
    }
}
