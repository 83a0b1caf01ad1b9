//! Weatherblock HTTP presentation layer
//!
//! This crate provides the HTTP API for the weather block: the raw data
//! endpoint consumed by the interactive editor, the static block render
//! endpoint, and health/readiness probes.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
