// Forecast service - Use case for the daily report-time forecast
use crate::application::errors::ForecastError;
use crate::application::forecast_extractor::ForecastExtractor;
use crate::application::upstream_gateway::UpstreamGateway;
use crate::domain::coordinate::Coordinate;
use crate::domain::forecast::ForecastResult;
use std::sync::Arc;

/// Location served without a geocoding lookup.
#[derive(Debug, Clone)]
pub struct DefaultLocation {
    pub coordinate: Coordinate,
    pub city: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchPlan {
    WeatherOnly,
    WeatherAndPlace,
}

#[derive(Clone)]
pub struct ForecastService {
    gateway: Arc<dyn UpstreamGateway>,
    extractor: ForecastExtractor,
    default_location: DefaultLocation,
}

impl ForecastService {
    pub fn new(
        gateway: Arc<dyn UpstreamGateway>,
        extractor: ForecastExtractor,
        default_location: DefaultLocation,
    ) -> Self {
        Self {
            gateway,
            extractor,
            default_location,
        }
    }

    pub fn default_location(&self) -> &DefaultLocation {
        &self.default_location
    }

    pub async fn get_forecast(&self, coordinate: Coordinate) -> Result<ForecastResult, ForecastError> {
        let plan = if coordinate == self.default_location.coordinate {
            FetchPlan::WeatherOnly
        } else {
            FetchPlan::WeatherAndPlace
        };

        tracing::debug!(
            latitude = coordinate.latitude(),
            longitude = coordinate.longitude(),
            ?plan,
            "Fetching forecast"
        );

        let (weather, city_name) = match plan {
            FetchPlan::WeatherOnly => (
                self.gateway.fetch_weather(coordinate).await,
                self.default_location.city.clone(),
            ),
            FetchPlan::WeatherAndPlace => tokio::join!(
                self.gateway.fetch_weather(coordinate),
                self.gateway.fetch_place_name(coordinate)
            ),
        };

        let payload = weather.inspect_err(|e| {
            tracing::warn!(
                latitude = coordinate.latitude(),
                longitude = coordinate.longitude(),
                error = %e,
                "Weather fetch failed"
            );
        })?;

        let forecasts = self.extractor.extract(&payload, Some(coordinate))?;
        Ok(ForecastResult::new(city_name, forecasts))
    }
}
