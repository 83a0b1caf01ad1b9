//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A location is required but was empty
    #[error("Location is required")]
    MissingLocation,

    /// Measurement system selector is not one of the supported values
    #[error("Invalid measurement system: {0}. Use 'imperial' or 'metric'")]
    InvalidMeasurementSystem(String),
}
