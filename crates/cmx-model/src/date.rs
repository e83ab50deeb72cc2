//! Timestamp parsing for release and start dates.
//!
//! Dates arrive either as milliseconds since the Unix epoch or as text.
//! Text may be RFC 3339 (the offset is dropped, keeping the written
//! wall-clock time), a naive `YYYY-MM-DDTHH:MM:SS` / `YYYY-MM-DD HH:MM:SS`
//! timestamp with optional fractional seconds, or a bare `YYYY-MM-DD` date
//! at midnight.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serializer;
use serde_json::Value;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Format used when timestamps are written back out.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a JSON timestamp value. Returns `None` when the value is not a
/// recognizable timestamp.
pub fn parse_timestamp(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|instant| instant.naive_utc()),
        Value::String(text) => parse_timestamp_str(text),
        _ => None,
    }
}

pub fn parse_timestamp_str(text: &str) -> Option<NaiveDateTime> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.naive_local());
    }
    for format in NAIVE_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(timestamp);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Render a JSON value for an error message without its quoting.
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn serialize_timestamp<S: Serializer>(
    value: &Option<NaiveDateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(timestamp) => serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use serde_json::json;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn parses_plain_date_at_midnight() {
        assert_eq!(
            parse_timestamp(&json!("2024-03-05")),
            Some(at(2024, 3, 5, 0, 0, 0))
        );
    }

    #[test]
    fn parses_naive_and_rfc3339_timestamps() {
        assert_eq!(
            parse_timestamp_str("2017-05-04T13:45:10"),
            Some(at(2017, 5, 4, 13, 45, 10))
        );
        assert_eq!(
            parse_timestamp_str("2017-05-04 13:45:10.250"),
            Some(at(2017, 5, 4, 13, 45, 10).with_nanosecond(250_000_000).unwrap())
        );
        assert_eq!(
            parse_timestamp_str("2017-05-04T13:45:10+02:00"),
            Some(at(2017, 5, 4, 13, 45, 10))
        );
    }

    #[test]
    fn parses_epoch_milliseconds() {
        assert_eq!(
            parse_timestamp(&json!(1_709_596_800_000_i64)),
            Some(at(2024, 3, 5, 0, 0, 0))
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_timestamp(&json!("next tuesday")), None);
        assert_eq!(parse_timestamp(&json!(true)), None);
        assert_eq!(parse_timestamp(&json!("")), None);
    }
}
