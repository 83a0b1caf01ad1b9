//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router
///
/// The block endpoints are mounted only when the block is registered;
/// without an API key the server answers health probes and nothing else.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check));

    if state.block.is_some() {
        router = router
            // Raw data endpoint consumed by the interactive editor
            .route(
                "/weatherblock/v1/weatherdata/{location}",
                get(handlers::weatherdata::get_weatherdata),
            )
            // Static block render
            .route("/weatherblock/v1/block", get(handlers::block::render_block));
    }

    router.with_state(state)
}
