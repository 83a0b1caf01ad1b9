//! Application layer - Use cases and orchestration
//!
//! Contains the fetch-cache-render pipeline, the interactive editor session,
//! and the port definitions implemented by infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;
pub mod view;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
pub use view::{BlockView, ClockContext, HourlyView, WeatherView, build_block_view};
