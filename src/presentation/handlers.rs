// HTTP request handlers
use crate::domain::coordinate::Coordinate;
use crate::domain::forecast::ForecastResult;
use crate::infrastructure::http_response::ApiError;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

/// Missing values fall back to the configured default location.
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Daily 14:00 forecast for a coordinate
pub async fn get_weather(
    Query(query): Query<WeatherQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ForecastResult>, ApiError> {
    let default = state.forecast_service.default_location().coordinate;
    let coordinate = Coordinate::new(
        query.lat.unwrap_or(default.latitude()),
        query.lon.unwrap_or(default.longitude()),
    )?;

    let result = state.forecast_service.get_forecast(coordinate).await?;
    Ok(Json(result))
}
