//! Health check handlers

use application::ports::CacheStats;
use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub block: BlockStatus,
}

/// Status of the weather block feature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockStatus {
    /// Whether the block registered (an API key is configured)
    pub registered: bool,
    /// Response cache statistics, when registered
    pub cache: Option<CacheStats>,
}

/// Readiness check - is the weather block able to serve?
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let registered = state.block.is_some();
    let cache = state.block.as_ref().map(|block| block.cache_stats());

    let status_code = if registered {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready: registered,
            block: BlockStatus { registered, cache },
        }),
    )
}
