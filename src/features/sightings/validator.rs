//! Sighting submission validation.
//!
//! Every rule runs on its own and records its own issue, so a caller gets the
//! complete list of problems from one submission instead of the first one.
//! Range checks on coordinates only run for values that parsed as finite
//! numbers; an unparseable coordinate yields only the parse error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};

pub const INVALID_DATE_TIME: &str = "Invalid or missing date/time.";
pub const FUTURE_DATE_TIME: &str = "Date/time cannot be in the future.";
pub const INVALID_ANIMAL_ID: &str = "Invalid or missing animal ID.";
pub const INVALID_COORDINATES: &str = "Invalid or missing latitude/longitude.";
pub const LATITUDE_OUT_OF_RANGE: &str = "Latitude must be between -90 and 90.";
pub const LONGITUDE_OUT_OF_RANGE: &str = "Longitude must be between -180 and 180.";

/// Offset-carrying formats tried after RFC 3339.
///
/// `%#z` takes `Z`, `+HH`, `+HHMM` and `+HH:MM`.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
];

/// Formats without an offset; interpreted as UTC
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Raw sighting form fields exactly as submitted
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RawSightingForm {
    /// ISO-8601 timestamp, e.g. `2024-05-01T14:30:00-06:00`
    pub date_time: Option<String>,
    #[serde(rename = "animalId")]
    pub animal_id: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ValidationCategory {
    DateTime,
    AnimalId,
    Coordinates,
    Latitude,
    Longitude,
}

impl ValidationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationCategory::DateTime => "date_time",
            ValidationCategory::AnimalId => "animal_id",
            ValidationCategory::Coordinates => "coordinates",
            ValidationCategory::Latitude => "latitude",
            ValidationCategory::Longitude => "longitude",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidationIssue {
    pub category: ValidationCategory,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(category: ValidationCategory, message: &str) -> Self {
        Self {
            category,
            message: message.to_string(),
        }
    }
}

/// Normalized values of an accepted submission
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSighting {
    pub timestamp: DateTime<Utc>,
    pub animal_id: i32,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Accepted(ValidatedSighting),
    Rejected(Vec<ValidationIssue>),
}

impl ValidationOutcome {
    #[cfg(test)]
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted(_))
    }

    pub fn into_result(self) -> Result<ValidatedSighting, Vec<ValidationIssue>> {
        match self {
            ValidationOutcome::Accepted(sighting) => Ok(sighting),
            ValidationOutcome::Rejected(issues) => Err(issues),
        }
    }
}

/// Parse an ISO-8601-like timestamp and normalize it to UTC.
///
/// Accepts RFC 3339, a space instead of `T`, offsets with or without a colon,
/// missing seconds, and bare dates (midnight). Values without an offset are
/// taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn parse_coordinate(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

fn parse_animal_id(raw: Option<&str>) -> Option<i32> {
    raw.and_then(|s| s.trim().parse::<i32>().ok())
}

/// Validate a raw submission against the current time.
pub fn validate_sighting(form: &RawSightingForm) -> ValidationOutcome {
    validate_sighting_at(form, Utc::now())
}

/// Validate a raw submission against an explicit `now`.
pub fn validate_sighting_at(form: &RawSightingForm, now: DateTime<Utc>) -> ValidationOutcome {
    let mut issues = Vec::new();

    let timestamp = form.date_time.as_deref().and_then(parse_timestamp);
    match timestamp {
        None => issues.push(ValidationIssue::new(
            ValidationCategory::DateTime,
            INVALID_DATE_TIME,
        )),
        Some(ts) if ts > now => issues.push(ValidationIssue::new(
            ValidationCategory::DateTime,
            FUTURE_DATE_TIME,
        )),
        Some(_) => {}
    }

    let animal_id = parse_animal_id(form.animal_id.as_deref());
    if animal_id.is_none() {
        issues.push(ValidationIssue::new(
            ValidationCategory::AnimalId,
            INVALID_ANIMAL_ID,
        ));
    }

    let latitude = parse_coordinate(form.latitude.as_deref());
    let longitude = parse_coordinate(form.longitude.as_deref());
    if latitude.is_none() || longitude.is_none() {
        issues.push(ValidationIssue::new(
            ValidationCategory::Coordinates,
            INVALID_COORDINATES,
        ));
    }

    if let Some(lat) = latitude {
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) {
            issues.push(ValidationIssue::new(
                ValidationCategory::Latitude,
                LATITUDE_OUT_OF_RANGE,
            ));
        }
    }

    if let Some(lon) = longitude {
        if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&lon) {
            issues.push(ValidationIssue::new(
                ValidationCategory::Longitude,
                LONGITUDE_OUT_OF_RANGE,
            ));
        }
    }

    match (timestamp, animal_id, latitude, longitude) {
        (Some(timestamp), Some(animal_id), Some(latitude), Some(longitude))
            if issues.is_empty() =>
        {
            ValidationOutcome::Accepted(ValidatedSighting {
                timestamp,
                animal_id,
                latitude,
                longitude,
            })
        }
        _ => ValidationOutcome::Rejected(issues),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use fake::Fake;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn form(date_time: &str, animal_id: &str, latitude: &str, longitude: &str) -> RawSightingForm {
        RawSightingForm {
            date_time: Some(date_time.to_string()),
            animal_id: Some(animal_id.to_string()),
            latitude: Some(latitude.to_string()),
            longitude: Some(longitude.to_string()),
        }
    }

    fn messages(outcome: ValidationOutcome) -> Vec<String> {
        match outcome {
            ValidationOutcome::Rejected(issues) => issues.into_iter().map(|i| i.message).collect(),
            ValidationOutcome::Accepted(s) => panic!("expected rejection, got {:?}", s),
        }
    }

    #[test]
    fn test_accepts_valid_submission_and_normalizes_to_utc() {
        let outcome = validate_sighting_at(
            &form("2024-05-01T08:30:00-06:00", "3", "44.6", "-110.5"),
            now(),
        );

        assert_eq!(
            outcome,
            ValidationOutcome::Accepted(ValidatedSighting {
                timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 14, 30, 0).unwrap(),
                animal_id: 3,
                latitude: 44.6,
                longitude: -110.5,
            })
        );
    }

    #[test]
    fn test_accepts_boundary_values() {
        let outcome = validate_sighting_at(
            &form("2024-06-01T12:00:00Z", "1", "-90", "180"),
            now(),
        );
        assert!(outcome.is_valid());

        let outcome = validate_sighting_at(&form("2024-06-01T12:00:00Z", "1", "90", "-180"), now());
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_latitude_out_of_range_yields_single_error() {
        let outcome = validate_sighting_at(&form("2024-01-01T00:00:00Z", "3", "91", "10"), now());
        assert_eq!(messages(outcome), vec![LATITUDE_OUT_OF_RANGE]);
    }

    #[test]
    fn test_future_date_and_non_numeric_latitude_yield_two_errors() {
        let outcome =
            validate_sighting_at(&form("2030-01-01T00:00:00Z", "3", "north", "10"), now());
        assert_eq!(messages(outcome), vec![FUTURE_DATE_TIME, INVALID_COORDINATES]);
    }

    #[test]
    fn test_future_date_and_out_of_range_latitude_are_both_reported() {
        let outcome = validate_sighting_at(&form("2024-06-01T12:00:01Z", "3", "-95", "10"), now());
        assert_eq!(messages(outcome), vec![FUTURE_DATE_TIME, LATITUDE_OUT_OF_RANGE]);
    }

    #[test]
    fn test_missing_fields_report_every_rule() {
        let outcome = validate_sighting_at(&RawSightingForm::default(), now());

        match outcome {
            ValidationOutcome::Rejected(issues) => {
                let categories: Vec<ValidationCategory> =
                    issues.iter().map(|i| i.category).collect();
                assert_eq!(
                    categories,
                    vec![
                        ValidationCategory::DateTime,
                        ValidationCategory::AnimalId,
                        ValidationCategory::Coordinates,
                    ]
                );
            }
            ValidationOutcome::Accepted(_) => panic!("empty form must be rejected"),
        }
    }

    #[test]
    fn test_all_rules_violated_at_once() {
        let outcome = validate_sighting_at(&form("yesterday", "bear", "100", "-200"), now());
        assert_eq!(
            messages(outcome),
            vec![
                INVALID_DATE_TIME,
                INVALID_ANIMAL_ID,
                LATITUDE_OUT_OF_RANGE,
                LONGITUDE_OUT_OF_RANGE,
            ]
        );
    }

    #[test]
    fn test_unparseable_coordinate_skips_range_check() {
        let outcome = validate_sighting_at(&form("2024-01-01T00:00:00Z", "3", "10", ""), now());
        assert_eq!(messages(outcome), vec![INVALID_COORDINATES]);
    }

    #[test]
    fn test_non_finite_coordinates_are_invalid() {
        let outcome = validate_sighting_at(&form("2024-01-01T00:00:00Z", "3", "NaN", "inf"), now());
        assert_eq!(messages(outcome), vec![INVALID_COORDINATES]);
    }

    #[test]
    fn test_animal_id_must_be_integer() {
        let outcome = validate_sighting_at(&form("2024-01-01T00:00:00Z", "3.5", "10", "10"), now());
        assert_eq!(messages(outcome), vec![INVALID_ANIMAL_ID]);

        let outcome = validate_sighting_at(&form("2024-01-01T00:00:00Z", " 7 ", "10", "10"), now());
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_parse_timestamp_variants() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 14, 30, 0).unwrap();

        assert_eq!(parse_timestamp("2024-05-01T14:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-01T14:30:00+00:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-01T08:30:00-0600"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-01 08:30:00-06:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-01T16:30+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-01T14:30Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-01 14:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-01T16:30:00+02"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-01T08:30-06"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-01T16:30:00.000+0200"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-01T14:30"), Some(expected));
        assert_eq!(parse_timestamp("  2024-05-01T14:30:00  "), Some(expected));
        assert_eq!(
            parse_timestamp("2024-05-01"),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("   "), None);
        assert_eq!(parse_timestamp("not a date"), None);
        assert_eq!(parse_timestamp("2024-13-01T00:00:00Z"), None);
    }

    #[test]
    fn test_random_valid_submissions_are_accepted_unchanged() {
        for _ in 0..200 {
            let latitude: f64 = (-90.0..90.0).fake();
            let longitude: f64 = (-180.0..180.0).fake();
            let animal_id: i32 = (1..10_000).fake();
            let minutes_ago: i64 = (0..525_600).fake();
            let timestamp = now() - Duration::minutes(minutes_ago);

            let outcome = validate_sighting_at(
                &form(
                    &timestamp.to_rfc3339(),
                    &animal_id.to_string(),
                    &latitude.to_string(),
                    &longitude.to_string(),
                ),
                now(),
            );

            assert_eq!(
                outcome,
                ValidationOutcome::Accepted(ValidatedSighting {
                    timestamp,
                    animal_id,
                    latitude,
                    longitude,
                })
            );
        }
    }

    #[test]
    fn test_into_result() {
        let accepted = validate_sighting_at(&form("2024-01-01T00:00:00Z", "3", "1", "2"), now());
        assert_eq!(accepted.into_result().map(|s| s.animal_id), Ok(3));

        let rejected = validate_sighting_at(&form("2024-01-01T00:00:00Z", "x", "1", "2"), now());
        assert_eq!(rejected.into_result().map_err(|issues| issues.len()), Err(1));
    }
}
