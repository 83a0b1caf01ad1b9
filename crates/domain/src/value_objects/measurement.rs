//! Measurement system value objects
//!
//! Maps the block's measurement-system selector to concrete display units.
//! There are exactly two systems; anything else is a caller error and fails
//! at the parsing boundary with [`DomainError::InvalidMeasurementSystem`].
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::{MeasurementSystem, SpeedUnit, TemperatureUnit};
//!
//! let units = MeasurementSystem::Imperial.units();
//! assert_eq!(units, (TemperatureUnit::Fahrenheit, SpeedUnit::Mph));
//!
//! let parsed: MeasurementSystem = "metric".parse().expect("valid selector");
//! assert_eq!(parsed.temperature_unit(), TemperatureUnit::Celsius);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Measurement system selected on the block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Fahrenheit and miles per hour (default)
    #[default]
    Imperial,
    /// Celsius and kilometres per hour
    Metric,
}

impl MeasurementSystem {
    /// Temperature unit for this system
    #[must_use]
    pub const fn temperature_unit(self) -> TemperatureUnit {
        match self {
            Self::Imperial => TemperatureUnit::Fahrenheit,
            Self::Metric => TemperatureUnit::Celsius,
        }
    }

    /// Wind speed unit for this system
    #[must_use]
    pub const fn speed_unit(self) -> SpeedUnit {
        match self {
            Self::Imperial => SpeedUnit::Mph,
            Self::Metric => SpeedUnit::Kph,
        }
    }

    /// Both display units as a pair
    #[must_use]
    pub const fn units(self) -> (TemperatureUnit, SpeedUnit) {
        (self.temperature_unit(), self.speed_unit())
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imperial => write!(f, "imperial"),
            Self::Metric => write!(f, "metric"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "imperial" => Ok(Self::Imperial),
            "metric" => Ok(Self::Metric),
            other => Err(DomainError::InvalidMeasurementSystem(other.to_string())),
        }
    }
}

/// Temperature display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    /// Uppercase suffix shown next to a temperature, e.g. `73°F`
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Fahrenheit => "F",
            Self::Celsius => "C",
        }
    }
}

/// Wind speed display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedUnit {
    Mph,
    Kph,
}

impl SpeedUnit {
    /// Suffix shown next to a wind speed, e.g. `12.5mph`
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Mph => "mph",
            Self::Kph => "kph",
        }
    }
}
