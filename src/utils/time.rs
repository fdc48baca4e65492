use crate::error::{format_error, ReportResult};
use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

/// Offset-less layouts the upstream feed uses, read as UTC
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

const MICROS_PER_HOUR: f64 = 3_600_000_000.0;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Parse a UTC timestamp, with or without an explicit offset
pub fn parse_utc_timestamp(value: &str) -> ReportResult<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format_error(&format!("Unparseable timestamp '{}'", value)))
}

/// Absolute length of a time span in fractional hours
pub fn abs_hours(delta: TimeDelta) -> f64 {
    match delta.num_microseconds() {
        Some(micros) => micros.unsigned_abs() as f64 / MICROS_PER_HOUR,
        // Spans beyond roughly 292,000 years overflow microseconds
        None => delta.num_milliseconds().unsigned_abs() as f64 / MILLIS_PER_HOUR,
    }
}

/// Hours between two timestamps, counted by magnitude when they are swapped
pub fn hours_between(start: &DateTime<Utc>, end: &DateTime<Utc>) -> f64 {
    abs_hours(end.signed_duration_since(*start))
}
