// Forecast domain models
use chrono::NaiveDate;
use serde::Serialize;

/// Temperature at the report time for one local calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub temperature: f64,
}

impl DailyForecast {
    pub fn new(date: NaiveDate, temperature: f64) -> Self {
        Self {
            date,
            temperature: round_to_tenth(temperature),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    #[serde(rename = "city")]
    pub city_name: String,
    #[serde(rename = "forecast")]
    pub forecasts: Vec<DailyForecast>,
}

impl ForecastResult {
    pub fn new(city_name: String, forecasts: Vec<DailyForecast>) -> Self {
        Self {
            city_name,
            forecasts,
        }
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
