use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};

use crate::domain::email::UNKNOWN_TIME;

pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

// `%.f` also matches an absent fraction.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M:%S%.f%z"];

/// Render a Graph `sentDateTime` as `YYYY-MM-DD HH:MM:SS UTC`, or
/// [`UNKNOWN_TIME`] when it is empty or unparseable.
pub fn format_timestamp(raw: &str) -> String {
    match parse_sent_time(raw) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => UNKNOWN_TIME.to_string(),
    }
}

/// Parse an ISO-8601 date-time. A trailing `Z` is dropped and the wall-clock
/// value is taken as UTC; an explicit offset is ignored, not applied.
pub fn parse_sent_time(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    let stripped = trimmed
        .strip_suffix('Z')
        .or_else(|| trimmed.strip_suffix('z'))
        .unwrap_or(trimmed);
    if stripped.is_empty() {
        return None;
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(stripped, fmt).ok())
        .or_else(|| {
            OFFSET_FORMATS
                .iter()
                .find_map(|fmt| DateTime::parse_from_str(stripped, fmt).ok())
                .map(|dt| dt.naive_local())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(stripped, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    // chrono accepts a leap second and years past four digits; neither fits
    // the fixed display form
    if naive.nanosecond() >= 1_000_000_000 || !(0..=9999).contains(&naive.year()) {
        return None;
    }
    Some(naive.and_utc())
}
