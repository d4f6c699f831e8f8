// Gateway trait for the weather and geocoding providers
use crate::application::errors::ForecastError;
use crate::domain::coordinate::Coordinate;
use crate::domain::weather_payload::WeatherPayload;
use async_trait::async_trait;
use std::sync::Arc;

/// Name used when the geocoding provider cannot be reached or understood.
pub const FALLBACK_PLACE_NAME: &str = "Custom Location";

/// Name used when the provider answers but knows no city, town or village.
pub const UNKNOWN_PLACE_NAME: &str = "Unknown";

#[async_trait]
pub trait UpstreamGateway: Send + Sync {
    /// Raw forecast for a coordinate
    async fn fetch_weather(&self, coordinate: Coordinate) -> Result<Arc<WeatherPayload>, ForecastError>;

    /// Human-readable place name. Never fails; falls back to [`FALLBACK_PLACE_NAME`].
    async fn fetch_place_name(&self, coordinate: Coordinate) -> String;
}
