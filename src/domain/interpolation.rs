// Interpolation of a temperature at a target instant
use chrono::DateTime;
use chrono_tz::Tz;

/// One sample of the series, already expressed in the local timezone.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalSample {
    pub instant: DateTime<Tz>,
    pub temperature: f64,
}

impl LocalSample {
    pub fn new(instant: DateTime<Tz>, temperature: f64) -> Self {
        Self {
            instant,
            temperature,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InterpolationError {
    #[error("no samples to interpolate from")]
    InsufficientData,
}

/// Value of the series at `target`.
///
/// An exact sample wins. Otherwise the nearest samples on either side are
/// joined linearly; with samples on one side only, the nearest one is used.
pub fn interpolate(points: &[LocalSample], target: DateTime<Tz>) -> Result<f64, InterpolationError> {
    if let Some(exact) = points.iter().find(|p| p.instant == target) {
        return Ok(exact.temperature);
    }

    let before = points
        .iter()
        .filter(|p| p.instant < target)
        .max_by(|a, b| a.instant.cmp(&b.instant));
    let after = points
        .iter()
        .filter(|p| p.instant > target)
        .min_by(|a, b| a.instant.cmp(&b.instant));

    match (before, after) {
        (Some(p1), Some(p2)) => {
            let span = seconds_between(&p1.instant, &p2.instant);
            let elapsed = seconds_between(&p1.instant, &target);
            Ok(p1.temperature + (p2.temperature - p1.temperature) * (elapsed / span))
        }
        (Some(p1), None) => Ok(p1.temperature),
        (None, Some(p2)) => Ok(p2.temperature),
        (None, None) => Err(InterpolationError::InsufficientData),
    }
}

fn seconds_between(from: &DateTime<Tz>, to: &DateTime<Tz>) -> f64 {
    (to.timestamp_millis() - from.timestamp_millis()) as f64 / 1000.0
}
