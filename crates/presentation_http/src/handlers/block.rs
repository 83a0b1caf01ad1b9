//! Static block render endpoint
//!
//! Renders the block markup for saved settings, exactly as it appears in
//! published page output. Timestamps use the resolved location's timezone;
//! the interactive preview is the path that renders viewer-local times.

use application::view::ClockContext;
use axum::{
    extract::{Query, State},
    response::Html,
};
use chrono::Utc;
use domain::entities::BlockSettings;

use crate::{error::ApiError, state::AppState};

/// GET /weatherblock/v1/block?location=…&measurementunit=…&showHourly=…
pub async fn render_block(
    State(state): State<AppState>,
    Query(settings): Query<BlockSettings>,
) -> Result<Html<String>, ApiError> {
    let block = state
        .block
        .as_ref()
        .ok_or_else(|| ApiError::NotFound("weather block is not registered".to_string()))?;

    let now_epoch = Utc::now().timestamp();
    let html = block
        .render(&settings, now_epoch, ClockContext::LocationLocal)
        .await?;

    Ok(Html(html))
}
