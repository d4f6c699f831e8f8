// HTTP gateway for the weather and reverse-geocoding providers
use crate::application::errors::{ForecastError, UpstreamError};
use crate::application::upstream_gateway::{FALLBACK_PLACE_NAME, UNKNOWN_PLACE_NAME, UpstreamGateway};
use crate::domain::coordinate::Coordinate;
use crate::domain::weather_payload::WeatherPayload;
use crate::infrastructure::cache_store::CacheStore;
use crate::infrastructure::config::{CacheSettings, UpstreamSettings};
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use std::sync::Arc;

const WEATHER_SERVICE: &str = "weather provider";
const GEOCODING_SERVICE: &str = "geocoding provider";

pub struct HttpUpstreamGateway {
    client: reqwest::Client,
    settings: UpstreamSettings,
    weather_cache: CacheStore<Coordinate, Arc<WeatherPayload>>,
    place_cache: CacheStore<Coordinate, String>,
}

#[derive(Debug, Deserialize)]
struct ReverseGeocodeResponse {
    #[serde(default)]
    address: Option<Address>,
}

#[derive(Debug, Deserialize)]
struct Address {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
}

impl Address {
    fn place_name(self) -> Option<String> {
        [self.city, self.town, self.village]
            .into_iter()
            .flatten()
            .find(|name| !name.is_empty())
    }
}

/// Shared client; every upstream call is bounded by the configured timeout.
pub fn build_http_client(settings: &UpstreamSettings) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(settings.timeout()).build()
}

impl HttpUpstreamGateway {
    pub fn new(client: reqwest::Client, settings: UpstreamSettings, cache: &CacheSettings) -> Self {
        Self {
            client,
            settings,
            weather_cache: CacheStore::new(cache.weather_ttl(), cache.max_entries),
            place_cache: CacheStore::new(cache.place_name_ttl(), cache.max_entries),
        }
    }

    async fn get_json<T>(
        &self,
        service: &'static str,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, UpstreamError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.settings.user_agent)
            .query(query)
            .send()
            .await
            .map_err(|source| UpstreamError::Transport { service, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status { service, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| UpstreamError::Transport { service, source })?;

        serde_json::from_slice(&body).map_err(|source| UpstreamError::Decode { service, source })
    }

    async fn request_weather(&self, coordinate: Coordinate) -> Result<Arc<WeatherPayload>, UpstreamError> {
        tracing::debug!(
            latitude = coordinate.latitude(),
            longitude = coordinate.longitude(),
            "Weather cache miss, querying provider"
        );

        let query = [
            ("lat", coordinate.latitude().to_string()),
            ("lon", coordinate.longitude().to_string()),
        ];
        let payload: WeatherPayload = self
            .get_json(WEATHER_SERVICE, &self.settings.weather_url, &query)
            .await?;

        Ok(Arc::new(payload))
    }

    async fn request_place_name(&self, coordinate: Coordinate) -> Result<String, UpstreamError> {
        tracing::debug!(
            latitude = coordinate.latitude(),
            longitude = coordinate.longitude(),
            "Place name cache miss, querying provider"
        );

        let query = [
            ("lat", coordinate.latitude().to_string()),
            ("lon", coordinate.longitude().to_string()),
            ("format", "json".to_string()),
            ("zoom", "10".to_string()),
            ("accept-language", "en".to_string()),
        ];
        let response: ReverseGeocodeResponse = self
            .get_json(GEOCODING_SERVICE, &self.settings.geocoding_url, &query)
            .await?;

        Ok(response
            .address
            .and_then(Address::place_name)
            .unwrap_or_else(|| UNKNOWN_PLACE_NAME.to_string()))
    }
}

#[async_trait]
impl UpstreamGateway for HttpUpstreamGateway {
    async fn fetch_weather(&self, coordinate: Coordinate) -> Result<Arc<WeatherPayload>, ForecastError> {
        self.weather_cache
            .get_or_try_populate(coordinate, self.request_weather(coordinate))
            .await
            .map_err(ForecastError::from)
    }

    async fn fetch_place_name(&self, coordinate: Coordinate) -> String {
        match self
            .place_cache
            .get_or_try_populate(coordinate, self.request_place_name(coordinate))
            .await
        {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(
                    latitude = coordinate.latitude(),
                    longitude = coordinate.longitude(),
                    error = %e,
                    "Reverse geocoding failed, using fallback name"
                );
                FALLBACK_PLACE_NAME.to_string()
            }
        }
    }
}
