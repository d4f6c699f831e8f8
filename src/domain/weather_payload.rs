// Weather provider payload - GeoJSON feature with a temperature time series
use super::coordinate::Coordinate;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherPayload {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    pub properties: Properties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    /// `[longitude, latitude, altitude]`
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Properties {
    pub timeseries: Vec<TimeSeriesEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeSeriesEntry {
    pub time: String,
    data: EntryData,
}

#[derive(Debug, Clone, Deserialize)]
struct EntryData {
    instant: InstantData,
}

#[derive(Debug, Clone, Deserialize)]
struct InstantData {
    details: InstantDetails,
}

#[derive(Debug, Clone, Deserialize)]
struct InstantDetails {
    air_temperature: f64,
}

impl TimeSeriesEntry {
    pub fn air_temperature(&self) -> f64 {
        self.data.instant.details.air_temperature
    }
}

impl WeatherPayload {
    /// Position reported by the provider, if present and valid.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self.geometry.as_ref()?.coordinates.as_slice() {
            [longitude, latitude, ..] => Coordinate::new(*latitude, *longitude).ok(),
            _ => None,
        }
    }
}
