//! Location value object
//!
//! A user-supplied place query (city name or postal code). The string is
//! passed verbatim to the upstream weather API, which resolves it; the only
//! validation here is non-emptiness.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Prefix for cache keys built from a location
const CACHE_KEY_PREFIX: &str = "weatherblock_data_";

/// A non-empty location query string
///
/// # Examples
///
/// ```
/// use domain::value_objects::Location;
///
/// let location = Location::new("Los Angeles").expect("non-empty");
/// assert_eq!(location.as_str(), "Los Angeles");
/// assert_eq!(location.cache_key(), "weatherblock_data_Los Angeles");
///
/// assert!(Location::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location(String);

impl Location {
    /// Create a new location
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingLocation`] if the value is empty or
    /// only whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::MissingLocation);
        }
        Ok(Self(value))
    }

    /// The raw query string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Cache key for this location
    ///
    /// The key uses the exact query string. Two spellings of the same place
    /// ("london" / "London") are distinct entries; callers are responsible
    /// for consistent keys.
    #[must_use]
    pub fn cache_key(&self) -> String {
        format!("{CACHE_KEY_PREFIX}{}", self.0)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Location {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
