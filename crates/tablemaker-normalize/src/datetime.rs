//! Date and time cell canonicalization.
//!
//! Date cells canonicalize to an RFC 3339 instant; an input without a
//! time component lands on UTC midnight, so re-normalizing a canonical
//! value is a no-op. Time cells canonicalize to `HH:MM:SS`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%b-%Y", "%d %b %Y"];

const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M", "%I:%M:%S %p", "%I:%M %p", "%I:%M%p"];

/// Canonicalize a date cell to an RFC 3339 instant at UTC.
///
/// Returns `None` when the value cannot be parsed as a date.
pub fn normalize_date(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(dt) = try_parse_datetime(trimmed) {
        return Some(format!("{}+00:00", dt.format("%Y-%m-%dT%H:%M:%S")));
    }
    try_parse_date(trimmed).map(|d| format!("{}T00:00:00+00:00", d.format("%Y-%m-%d")))
}

/// Canonicalize a time cell to `HH:MM:SS`.
///
/// A full datetime input keeps only its time part. Returns `None` when
/// the value cannot be parsed as a time.
pub fn normalize_time(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let time = try_parse_datetime(trimmed).map(|dt| dt.time()).or_else(|| {
        TIME_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
    })?;
    Some(time.format("%H:%M:%S").to_string())
}

fn try_parse_datetime(value: &str) -> Option<NaiveDateTime> {
    // Offset-carrying inputs keep their instant but land on UTC.
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

fn try_parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}
