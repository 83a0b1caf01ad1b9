//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Transport failure talking to the upstream weather API
    #[error("Upstream request failed: {0}")]
    Upstream(String),

    /// Upstream responded but the body did not match the expected shape
    #[error("Response parse failed: {0}")]
    Parse(String),

    /// Upstream rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
