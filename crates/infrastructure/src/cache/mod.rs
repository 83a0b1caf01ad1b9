//! Response cache implementations

mod moka_cache;

pub use moka_cache::MokaWeatherCache;
