// Coordinate to timezone lookup backed by the embedded tzf index
use crate::application::timezone_resolver::TimezoneResolver;
use crate::domain::coordinate::Coordinate;
use chrono_tz::Tz;
use tzf_rs::DefaultFinder;

/// Loading the index is expensive; build once and share.
pub struct TzfTimezoneResolver {
    finder: DefaultFinder,
}

impl TzfTimezoneResolver {
    pub fn new() -> Self {
        Self {
            finder: DefaultFinder::new(),
        }
    }
}

impl Default for TzfTimezoneResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneResolver for TzfTimezoneResolver {
    fn resolve(&self, coordinate: &Coordinate) -> Tz {
        let name = self
            .finder
            .get_tz_name(coordinate.longitude(), coordinate.latitude());
        parse_zone_or_utc(name)
    }
}

fn parse_zone_or_utc(name: &str) -> Tz {
    name.parse().unwrap_or_else(|_| {
        tracing::debug!(zone = name, "unknown timezone name, using UTC");
        Tz::UTC
    })
}
