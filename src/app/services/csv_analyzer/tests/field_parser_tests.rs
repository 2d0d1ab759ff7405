//! Tests for the total field conversion functions

use crate::app::services::csv_analyzer::field_parsers::{
    parse_count, parse_flag, parse_flexible_date, parse_rating, parse_time_value,
};

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_time_value_clock_forms() {
    // H:MM:SS
    assert_close(parse_time_value("0:01:20"), 1.0 / 60.0 + 20.0 / 3600.0);
    assert_close(parse_time_value("2:15:00"), 2.25);
    // MM:SS
    assert_close(parse_time_value("2:30"), 2.0 / 60.0 + 30.0 / 3600.0);
    assert_close(parse_time_value("90:00"), 1.5);
}

#[test]
fn test_time_value_unit_scaling() {
    assert_close(parse_time_value("2 hours"), 2.0);
    assert_close(parse_time_value("1.5 Hours"), 1.5);
    assert_close(parse_time_value("30 minutes"), 0.5);
    assert_close(parse_time_value("90 Minutes"), 1.5);
    assert_close(parse_time_value("2 days"), 48.0);
}

#[test]
fn test_time_value_bare_number_is_hours() {
    assert_close(parse_time_value("90"), 90.0);
    assert_close(parse_time_value("0.25"), 0.25);
}

#[test]
fn test_time_value_invalid_is_zero() {
    assert_close(parse_time_value(""), 0.0);
    assert_close(parse_time_value("   "), 0.0);
    assert_close(parse_time_value("soon"), 0.0);
    assert_close(parse_time_value("a:b:c"), 0.0);
    assert_close(parse_time_value("1:2:3:4"), 0.0);
}

#[test]
fn test_rating_bounds() {
    assert_close(parse_rating("1"), 1.0);
    assert_close(parse_rating("4.5"), 4.5);
    assert_close(parse_rating("5"), 5.0);
    assert_close(parse_rating("4.5 stars"), 4.5);

    // Out of range or non-numeric collapses to 0
    assert_close(parse_rating("0.5"), 0.0);
    assert_close(parse_rating("6"), 0.0);
    assert_close(parse_rating("excellent"), 0.0);
    assert_close(parse_rating(""), 0.0);
}

#[test]
fn test_flag_parsing_is_case_sensitive() {
    assert!(parse_flag("true"));
    assert!(parse_flag("1"));
    assert!(parse_flag("yes"));
    assert!(parse_flag("  yes  "));

    // Inherited quirk: only the exact lowercase spellings count
    assert!(!parse_flag("True"));
    assert!(!parse_flag("YES"));
    assert!(!parse_flag("y"));
    assert!(!parse_flag("0"));
    assert!(!parse_flag(""));
}

#[test]
fn test_count_parsing() {
    assert_eq!(parse_count("3"), 3);
    assert_eq!(parse_count(" 12 "), 12);
    assert_eq!(parse_count("-2"), 0);
    assert_eq!(parse_count("many"), 0);
    assert_eq!(parse_count(""), 0);
}

#[test]
fn test_flexible_date_formats() {
    use chrono::{Datelike, Timelike};

    let rfc = parse_flexible_date("2024-03-01T09:30:00Z").unwrap();
    assert_eq!((rfc.year(), rfc.month(), rfc.hour()), (2024, 3, 9));

    let naive = parse_flexible_date("2024-03-01 09:30:00").unwrap();
    assert_eq!(naive.minute(), 30);

    let date_only = parse_flexible_date("2024-03-01").unwrap();
    assert_eq!(date_only.hour(), 0);

    let us_form = parse_flexible_date("03/15/2024").unwrap();
    assert_eq!((us_form.month(), us_form.day()), (3, 15));

    assert!(parse_flexible_date("last tuesday").is_none());
    assert!(parse_flexible_date("").is_none());
}
