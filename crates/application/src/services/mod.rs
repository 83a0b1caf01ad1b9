//! Application services - Use case implementations

mod block_service;
mod debounce;
mod editor_session;
mod weather_service;

pub use block_service::{BlockRegistration, WeatherBlock};
pub use debounce::DebounceTimer;
pub use editor_session::{DEFAULT_DEBOUNCE, EditorPhase, EditorSession};
pub use weather_service::WeatherService;
