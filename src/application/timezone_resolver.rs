// Timezone lookup trait
use crate::domain::coordinate::Coordinate;
use chrono_tz::Tz;

pub trait TimezoneResolver: Send + Sync {
    /// Zone in effect at `coordinate`, or UTC when none is known.
    fn resolve(&self, coordinate: &Coordinate) -> Tz;
}
