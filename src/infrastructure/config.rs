use crate::application::forecast_service::DefaultLocation;
use crate::domain::coordinate::Coordinate;
use anyhow::Context;
use chrono::NaiveTime;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
    pub cache: CacheSettings,
    pub default_location: DefaultLocationSettings,
    pub report: ReportSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub bind_addr: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UpstreamSettings {
    pub user_agent: String,
    pub weather_url: String,
    pub geocoding_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CacheSettings {
    pub weather_ttl_secs: u64,
    pub place_name_ttl_secs: u64,
    pub max_entries: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DefaultLocationSettings {
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ReportSettings {
    pub hour: u32,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            user_agent: "PolakoWeatherApp/1.0 (contact: example@email.com)".to_string(),
            weather_url: "https://api.met.no/weatherapi/locationforecast/2.0/compact".to_string(),
            geocoding_url: "https://nominatim.openstreetmap.org/reverse".to_string(),
            timeout_secs: 5,
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            weather_ttl_secs: 600,
            place_name_ttl_secs: 3600,
            max_entries: 10_000,
        }
    }
}

impl Default for DefaultLocationSettings {
    fn default() -> Self {
        Self {
            latitude: 44.7866,
            longitude: 20.4489,
            city: "Belgrade".to_string(),
        }
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self { hour: 14 }
    }
}

impl ServerSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl UpstreamSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl CacheSettings {
    pub fn weather_ttl(&self) -> Duration {
        Duration::from_secs(self.weather_ttl_secs)
    }

    pub fn place_name_ttl(&self) -> Duration {
        Duration::from_secs(self.place_name_ttl_secs)
    }
}

impl DefaultLocationSettings {
    pub fn to_default_location(&self) -> anyhow::Result<DefaultLocation> {
        let coordinate = Coordinate::new(self.latitude, self.longitude)
            .context("invalid default_location coordinate")?;

        Ok(DefaultLocation {
            coordinate,
            city: self.city.clone(),
        })
    }
}

impl ReportSettings {
    pub fn report_time(&self) -> anyhow::Result<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, 0, 0)
            .with_context(|| format!("report.hour must be between 0 and 23, got {}", self.hour))
    }
}

/// Defaults, then `config/forecast.toml` if present, then `FORECAST_*` env vars
/// (`FORECAST_CACHE__WEATHER_TTL_SECS=60`).
pub fn load_settings() -> anyhow::Result<Settings> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/forecast").required(false))
        .add_source(
            config::Environment::with_prefix("FORECAST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(source: &str) -> Settings {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_when_empty() {
        let settings = from_toml("");

        assert_eq!(settings.cache.weather_ttl(), Duration::from_secs(600));
        assert_eq!(settings.cache.place_name_ttl(), Duration::from_secs(3600));
        assert_eq!(settings.upstream.timeout(), Duration::from_secs(5));
        assert_eq!(
            settings.report.report_time().unwrap(),
            NaiveTime::from_hms_opt(14, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let settings = from_toml(
            r#"
            [cache]
            weather_ttl_secs = 60

            [default_location]
            latitude = 59.91
            longitude = 10.75
            city = "Oslo"
            "#,
        );

        assert_eq!(settings.cache.weather_ttl_secs, 60);
        assert_eq!(settings.cache.place_name_ttl_secs, 3600);

        let location = settings.default_location.to_default_location().unwrap();
        assert_eq!(location.city, "Oslo");
        assert_eq!(location.coordinate, Coordinate::new(59.91, 10.75).unwrap());
    }

    #[test]
    fn test_rejects_invalid_default_location() {
        let settings = from_toml("[default_location]\nlatitude = 123.0");
        assert!(settings.default_location.to_default_location().is_err());
    }

    #[test]
    fn test_rejects_invalid_report_hour() {
        let settings = from_toml("[report]\nhour = 24");
        assert!(settings.report.report_time().is_err());
    }
}
