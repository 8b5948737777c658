//! Timestamp helpers shared by the map composer and the sighting listing.
//!
//! Callers capture `now` once per request and pass it down, so every age in
//! one payload is measured against the same instant.

use chrono::{DateTime, SecondsFormat, Utc};

const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Elapsed hours between `date_time` and `now`, fractional down to the nanosecond
pub fn age_in_hours(date_time: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let elapsed = now - date_time;
    let seconds = elapsed.num_seconds() as f64 + f64::from(elapsed.subsec_nanos()) / 1e9;
    seconds / SECONDS_PER_HOUR
}

/// "{hours} hours" with zero decimal places
pub fn format_age(hours: f64) -> String {
    format!("{:.0} hours", hours)
}

/// ISO-8601 with an explicit `+00:00` offset
pub fn iso_timestamp(date_time: DateTime<Utc>) -> String {
    date_time.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}
