// Test doubles for the application layer
use crate::application::errors::{ForecastError, UpstreamError};
use crate::application::timezone_resolver::TimezoneResolver;
use crate::application::upstream_gateway::UpstreamGateway;
use crate::domain::coordinate::Coordinate;
use crate::domain::weather_payload::WeatherPayload;
use async_trait::async_trait;
use chrono_tz::Tz;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Barrier;

/// Resolves every coordinate to the same zone.
pub struct FixedTimezone(pub Tz);

impl TimezoneResolver for FixedTimezone {
    fn resolve(&self, _coordinate: &Coordinate) -> Tz {
        self.0
    }
}

/// Build a provider document from `(timestamp, temperature)` pairs.
pub fn payload(entries: &[(&str, f64)]) -> WeatherPayload {
    let timeseries: Vec<serde_json::Value> = entries
        .iter()
        .map(|(time, temperature)| {
            serde_json::json!({
                "time": time,
                "data": { "instant": { "details": { "air_temperature": temperature } } }
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "type": "Feature",
        "properties": { "timeseries": timeseries }
    }))
    .expect("valid payload")
}

/// In-memory gateway that counts calls.
pub struct StubGateway {
    weather: Result<WeatherPayload, reqwest::StatusCode>,
    place_name: String,
    rendezvous: Option<Barrier>,
    pub weather_calls: AtomicUsize,
    pub place_calls: AtomicUsize,
}

impl StubGateway {
    pub fn new(weather: WeatherPayload, place_name: &str) -> Self {
        Self {
            weather: Ok(weather),
            place_name: place_name.to_string(),
            rendezvous: None,
            weather_calls: AtomicUsize::new(0),
            place_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(status: reqwest::StatusCode, place_name: &str) -> Self {
        Self {
            weather: Err(status),
            ..Self::new(payload(&[]), place_name)
        }
    }

    /// Both fetches block until the other one has started.
    pub fn requiring_overlap(mut self) -> Self {
        self.rendezvous = Some(Barrier::new(2));
        self
    }

    pub fn weather_calls(&self) -> usize {
        self.weather_calls.load(Ordering::SeqCst)
    }

    pub fn place_calls(&self) -> usize {
        self.place_calls.load(Ordering::SeqCst)
    }

    async fn meet(&self) {
        if let Some(barrier) = &self.rendezvous {
            barrier.wait().await;
        }
    }
}

#[async_trait]
impl UpstreamGateway for StubGateway {
    async fn fetch_weather(&self, _coordinate: Coordinate) -> Result<Arc<WeatherPayload>, ForecastError> {
        self.weather_calls.fetch_add(1, Ordering::SeqCst);
        self.meet().await;

        match &self.weather {
            Ok(payload) => Ok(Arc::new(payload.clone())),
            Err(status) => Err(UpstreamError::Status {
                service: "weather",
                status: *status,
            }
            .into()),
        }
    }

    async fn fetch_place_name(&self, _coordinate: Coordinate) -> String {
        self.place_calls.fetch_add(1, Ordering::SeqCst);
        self.meet().await;
        self.place_name.clone()
    }
}
