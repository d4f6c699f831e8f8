// Local time mapping - UTC timestamps to zoned instants
use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, TimeZone};
use chrono_tz::Tz;

#[derive(Debug, thiserror::Error)]
#[error("malformed timestamp `{timestamp}`: {source}")]
pub struct TimestampParseError {
    pub timestamp: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Parse an RFC 3339 timestamp (`Z` or explicit offset) and express it in `tz`.
pub fn to_local(timestamp: &str, tz: Tz) -> Result<DateTime<Tz>, TimestampParseError> {
    let parsed = DateTime::parse_from_rfc3339(timestamp).map_err(|source| TimestampParseError {
        timestamp: timestamp.to_string(),
        source,
    })?;

    Ok(parsed.with_timezone(&tz))
}

/// The instant at which a wall clock in `tz` reads `time` on `date`.
///
/// When clocks go back the reading happens twice and the earlier instant is
/// used. When clocks go forward over the reading, the result is one hour later.
pub fn local_instant(date: NaiveDate, time: NaiveTime, tz: Tz) -> Option<DateTime<Tz>> {
    let naive = date.and_time(time);
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(naive + TimeDelta::hours(1))).earliest())
}
