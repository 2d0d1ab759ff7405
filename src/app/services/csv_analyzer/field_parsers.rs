//! Field parsing utilities for raw contact-data cells
//!
//! Pure, context-free conversion functions. Every function here is total:
//! invalid or absent input yields a documented safe default instead of an
//! error, so a single garbled cell can never poison a whole row.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

use crate::constants::{RATING_MAX, RATING_MIN, TRUE_FLAG_VALUES};

/// Extract the leading non-negative number from a string, if any.
///
/// Mirrors the lenient numeric prefix parse common in spreadsheet exports,
/// so "2 hours" yields 2.0 and "4.5 stars" yields 4.5.
fn leading_number(value: &str) -> Option<f64> {
    static LEADING_NUMBER: OnceLock<Regex> = OnceLock::new();
    let re = LEADING_NUMBER.get_or_init(|| Regex::new(r"^\d+(\.\d+)?").expect("valid regex"));

    re.find(value.trim())
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Parse a duration cell into fractional hours.
///
/// Accepted forms:
/// - `H:MM:SS` (three colon-separated parts)
/// - `MM:SS` (two parts)
/// - a number with an optional unit word: "minute" scales by 1/60,
///   "day" by 24, "hour" (or no unit at all) is taken as hours
///
/// Anything else, including a blank cell, yields 0.0.
pub fn parse_time_value(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    if trimmed.contains(':') {
        let parts: Option<Vec<f64>> = trimmed
            .split(':')
            .map(|part| part.trim().parse::<f64>().ok())
            .collect();

        // Durations are never negative; a stray sign in a part clamps to 0
        return match parts.as_deref() {
            Some([hours, minutes, seconds]) => {
                (hours + minutes / 60.0 + seconds / 3600.0).max(0.0)
            }
            Some([minutes, seconds]) => (minutes / 60.0 + seconds / 3600.0).max(0.0),
            _ => 0.0,
        };
    }

    let Some(value) = leading_number(trimmed) else {
        return 0.0;
    };

    let lower = trimmed.to_lowercase();
    if lower.contains("minute") {
        value / 60.0
    } else if lower.contains("day") {
        value * 24.0
    } else {
        // "hour" or no unit: the value is already hours
        value
    }
}

/// Parse a survey/customer rating cell.
///
/// Valid only within the closed interval [1,5]; anything else yields 0.0,
/// which downstream averages treat as "not rated".
pub fn parse_rating(raw: &str) -> f64 {
    match leading_number(raw) {
        Some(value) if (RATING_MIN..=RATING_MAX).contains(&value) => value,
        _ => 0.0,
    }
}

/// Parse a boolean flag cell (abandoned, lost-in-IVR).
///
/// True iff the trimmed cell equals "true", "1", or "yes" exactly;
/// the comparison is case-sensitive.
pub fn parse_flag(raw: &str) -> bool {
    TRUE_FLAG_VALUES.contains(&raw.trim())
}

/// Parse a non-negative integer count cell; non-numeric input yields 0
pub fn parse_count(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}

/// Parse a date cell leniently, trying the formats seen in real exports.
///
/// Tries RFC 3339 first, then naive datetime and date-only forms.
/// Returns `None` for anything unparseable; callers discard such dates
/// rather than failing.
pub fn parse_flexible_date(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));
        }
    }

    for format in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            let naive = date.and_hms_opt(0, 0, 0)?;
            return Some(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));
        }
    }

    None
}
