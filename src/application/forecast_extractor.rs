// Forecast extractor - Daily report-time temperatures from a raw series
use crate::application::errors::ForecastError;
use crate::application::timezone_resolver::TimezoneResolver;
use crate::domain::coordinate::Coordinate;
use crate::domain::forecast::DailyForecast;
use crate::domain::interpolation::{interpolate, InterpolationError, LocalSample};
use crate::domain::local_time::{local_instant, to_local};
use crate::domain::weather_payload::WeatherPayload;
use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct ForecastExtractor {
    resolver: Arc<dyn TimezoneResolver>,
    report_time: NaiveTime,
}

impl ForecastExtractor {
    pub fn new(resolver: Arc<dyn TimezoneResolver>, report_time: NaiveTime) -> Self {
        Self {
            resolver,
            report_time,
        }
    }

    /// One forecast per local calendar day, ascending by date.
    ///
    /// The timezone comes from `coordinate`, falling back to the payload's own
    /// geometry and finally to UTC. Days without a usable sample are left out.
    pub fn extract(
        &self,
        payload: &WeatherPayload,
        coordinate: Option<Coordinate>,
    ) -> Result<Vec<DailyForecast>, ForecastError> {
        let tz = coordinate
            .or_else(|| payload.coordinate())
            .map(|c| self.resolver.resolve(&c))
            .unwrap_or(Tz::UTC);

        let mut buckets: BTreeMap<NaiveDate, Vec<LocalSample>> = BTreeMap::new();
        for entry in &payload.properties.timeseries {
            let instant = to_local(&entry.time, tz)?;
            buckets
                .entry(instant.date_naive())
                .or_default()
                .push(LocalSample::new(instant, entry.air_temperature()));
        }

        let mut forecasts = Vec::with_capacity(buckets.len());
        for (date, mut samples) in buckets {
            samples.sort_by(|a, b| a.instant.cmp(&b.instant));

            let Some(target) = local_instant(date, self.report_time, tz) else {
                tracing::debug!(%date, %tz, "report time does not exist locally, skipping day");
                continue;
            };

            match interpolate(&samples, target) {
                Ok(temperature) => forecasts.push(DailyForecast::new(date, temperature)),
                Err(InterpolationError::InsufficientData) => {
                    tracing::debug!(%date, "no samples for day, skipping");
                }
            }
        }

        forecasts.sort_by_key(|f| f.date);
        Ok(forecasts)
    }
}
