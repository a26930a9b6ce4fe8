// ABOUTME: Field value coercion for loosely-typed export text
// ABOUTME: Numbers, timestamps in time columns, epoch normalization, and human duration text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Field coercion rules
//!
//! A value that parses fully as a finite number becomes a number. A value in
//! a column whose name contains `time` and whose text contains a date-like
//! separator becomes a timestamp. Everything else stays text.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::constants::columns::multi_section::TIME_HEADER_SUBSTRING;
use crate::constants::units::{
    EPOCH_MILLIS_THRESHOLD, MS_PER_SECOND, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::models::FieldValue;

/// Naive date-time layouts accepted in exports, tried in order
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Date-only layouts accepted in exports (midnight UTC)
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Coerce one raw field under its header name
#[must_use]
pub fn coerce_field(header: &str, raw: &str) -> FieldValue {
    if let Some(number) = parse_number(raw) {
        return FieldValue::Number(number);
    }
    if header.to_lowercase().contains(TIME_HEADER_SUBSTRING) && looks_like_date(raw) {
        if let Some(ts) = parse_timestamp(raw) {
            return FieldValue::Timestamp(ts);
        }
    }
    FieldValue::Text(raw.to_owned())
}

/// Parse a finite number; empty, partial, and non-finite text is `None`
#[must_use]
pub fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse a number, coercing anything unreadable (or negative) to 0
#[must_use]
pub fn number_or_zero(raw: &str) -> f64 {
    parse_number(raw).unwrap_or(0.0).max(0.0)
}

/// Truncate a float count to `u32`, clamping negatives and overflow
#[must_use]
pub fn truncate_count(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else if value >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        // Safe: range checked above
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = value.trunc() as u32;
        count
    }
}

/// Whether text contains a date-like separator next to digits
#[must_use]
pub fn looks_like_date(raw: &str) -> bool {
    raw.chars().any(|c| c.is_ascii_digit()) && raw.contains(['-', '/', ':'])
}

/// Parse a date or date-time into epoch seconds; naive values are UTC
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp());
    }
    for layout in DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, layout) {
            return Some(ndt.and_utc().timestamp());
        }
    }
    for layout in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, layout) {
            return date.and_hms_opt(0, 0, 0).map(|ndt| ndt.and_utc().timestamp());
        }
    }
    None
}

/// Convert an epoch number to seconds; millisecond epochs are scaled down.
///
/// `None` when the result is not a representable date.
#[must_use]
pub fn epoch_seconds(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let seconds = if value > EPOCH_MILLIS_THRESHOLD {
        value / MS_PER_SECOND
    } else {
        value
    };
    // Saturating cast; out-of-range values are rejected by chrono below
    #[allow(clippy::cast_possible_truncation)]
    let seconds = seconds.trunc() as i64;
    DateTime::from_timestamp(seconds, 0).map(|_| seconds)
}

/// Parse a duration into seconds.
///
/// Accepts plain seconds (`3600`), clock text (`1:05:00`, `45:30`), and unit
/// text (`1h 5m`, `45m`, `30s`).
#[must_use]
pub fn parse_duration(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if let Some(seconds) = parse_number(raw) {
        return Some(seconds.max(0.0));
    }
    if raw.contains(':') {
        return parse_clock_duration(raw);
    }
    parse_unit_duration(raw)
}

fn parse_clock_duration(raw: &str) -> Option<f64> {
    let parts = raw
        .split(':')
        .map(parse_number)
        .collect::<Option<Vec<_>>>()?;
    match parts.as_slice() {
        [m, s] => Some(m * SECONDS_PER_MINUTE + s),
        [h, m, s] => Some(h * SECONDS_PER_HOUR + m * SECONDS_PER_MINUTE + s),
        _ => None,
    }
}

fn parse_unit_duration(raw: &str) -> Option<f64> {
    let mut total = 0.0;
    let mut matched = false;
    for token in raw.split_whitespace() {
        let split = token.find(|c: char| c.is_ascii_alphabetic())?;
        let (amount, unit) = token.split_at(split);
        let amount = parse_number(amount)?;
        let factor = match unit.to_lowercase().as_str() {
            "h" | "hr" | "hrs" | "hour" | "hours" => SECONDS_PER_HOUR,
            "m" | "min" | "mins" | "minute" | "minutes" => SECONDS_PER_MINUTE,
            "s" | "sec" | "secs" | "second" | "seconds" => 1.0,
            _ => return None,
        };
        total += amount * factor;
        matched = true;
    }
    matched.then_some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_numbers_first() {
        assert_eq!(coerce_field("starttime", "1700000000"), FieldValue::Number(1.7e9));
        assert_eq!(coerce_field("name", "  42 "), FieldValue::Number(42.0));
    }

    #[test]
    fn test_coerce_timestamp_only_in_time_columns() {
        assert_eq!(
            coerce_field("StartTime", "2024-01-02 03:04:05"),
            FieldValue::Timestamp(1_704_164_645)
        );
        assert_eq!(
            coerce_field("mydate", "2024-01-02"),
            FieldValue::Text("2024-01-02".into())
        );
    }

    #[test]
    fn test_non_finite_numbers_stay_text() {
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(coerce_field("note", "nan"), FieldValue::Text("nan".into()));
    }

    #[test]
    fn test_epoch_millis_are_scaled() {
        assert_eq!(epoch_seconds(1_700_000_000_000.0), Some(1_700_000_000));
        assert_eq!(epoch_seconds(1_700_000_000.0), Some(1_700_000_000));
    }

    #[test]
    fn test_epoch_outside_calendar_is_rejected() {
        assert_eq!(epoch_seconds(1e30), None);
        assert_eq!(epoch_seconds(f64::INFINITY), None);
    }

    #[test]
    fn test_duration_forms() {
        assert_eq!(parse_duration("3600"), Some(3600.0));
        assert_eq!(parse_duration("1h 5m"), Some(3900.0));
        assert_eq!(parse_duration("45m"), Some(2700.0));
        assert_eq!(parse_duration("1:05:00"), Some(3900.0));
        assert_eq!(parse_duration("soon"), None);
    }

    #[test]
    fn test_truncate_count_clamps() {
        assert_eq!(truncate_count(5.9), 5);
        assert_eq!(truncate_count(-3.0), 0);
        assert_eq!(truncate_count(f64::NAN), 0);
    }
}
