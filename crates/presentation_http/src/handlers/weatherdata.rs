//! Raw weather data endpoint
//!
//! Serves the cached-or-fetched upstream body verbatim. The interactive
//! editor fetches this endpoint and parses the body itself, so nothing is
//! re-encoded here. The path parameter arrives percent-decoded.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use domain::value_objects::Location;

use crate::{error::ApiError, state::AppState};

/// GET /weatherblock/v1/weatherdata/{location}
pub async fn get_weatherdata(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> Result<Response, ApiError> {
    let block = state
        .block
        .as_ref()
        .ok_or_else(|| ApiError::NotFound("weather block is not registered".to_string()))?;

    let location = Location::new(location).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let body = block.weather_data(&location).await?;

    Ok((
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        body,
    )
        .into_response())
}
