//! Value objects for the weather block domain

mod location;
mod measurement;
mod timezone;

pub use location::Location;
pub use measurement::{MeasurementSystem, SpeedUnit, TemperatureUnit};
pub use timezone::Timezone;
