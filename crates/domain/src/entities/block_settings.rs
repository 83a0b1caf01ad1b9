//! Block settings entity
//!
//! The configuration persisted for one placed weather block. Field names
//! match the block attribute schema, so the same struct deserializes from
//! stored attributes and from render-request query strings.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{Location, MeasurementSystem};

/// Per-block configuration: location, measurement system, hourly toggle
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockSettings {
    /// Location query; an empty string means "not configured yet"
    #[serde(default)]
    pub location: String,

    /// Selected measurement system (defaults to imperial)
    #[serde(default)]
    pub measurementunit: MeasurementSystem,

    /// Whether the hourly forecast list is shown
    #[serde(default, rename = "showHourly")]
    pub show_hourly: bool,
}

impl BlockSettings {
    /// Create settings for a location with defaults for the rest
    #[must_use]
    pub fn for_location(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Self::default()
        }
    }

    /// Whether a location has been entered
    #[must_use]
    pub fn has_location(&self) -> bool {
        !self.location.trim().is_empty()
    }

    /// The configured location as a validated value object
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingLocation`] when the location is empty.
    pub fn location(&self) -> Result<Location, DomainError> {
        Location::new(self.location.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_block_schema() {
        let settings = BlockSettings::default();
        assert_eq!(settings.location, "");
        assert_eq!(settings.measurementunit, MeasurementSystem::Imperial);
        assert!(!settings.show_hourly);
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let settings: BlockSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, BlockSettings::default());
    }

    #[test]
    fn deserializes_full_attributes() {
        let json = r#"{"location":"Seattle","measurementunit":"metric","showHourly":true}"#;
        let settings: BlockSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.location, "Seattle");
        assert_eq!(settings.measurementunit, MeasurementSystem::Metric);
        assert!(settings.show_hourly);
    }

    #[test]
    fn serializes_show_hourly_in_camel_case() {
        let settings = BlockSettings {
            show_hourly: true,
            ..BlockSettings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"showHourly\":true"));
    }

    #[test]
    fn has_location_ignores_whitespace() {
        assert!(!BlockSettings::for_location("  ").has_location());
        assert!(BlockSettings::for_location("Oslo").has_location());
    }

    #[test]
    fn location_accessor_validates() {
        let settings = BlockSettings::for_location("Oslo");
        assert_eq!(settings.location().unwrap().as_str(), "Oslo");

        let empty = BlockSettings::default();
        assert_eq!(empty.location(), Err(DomainError::MissingLocation));
    }
}
