use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;
use std::fmt::Display;

/// Text shown in place of a timestamp that could not be read.
pub const INVALID_DATE: &str = "Invalid Date";

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Reads the `timestamp` the backend sends next to `current_price`.
///
/// Accepted: RFC 3339, RFC 2822, naive ISO date-times (wall-clock time in
/// `zone`, like a JS `Date`), plain dates (UTC midnight), digit strings
/// (seconds up to ten digits, milliseconds beyond) and JSON numbers
/// (milliseconds).
pub fn parse_timestamp<Tz: TimeZone>(value: &Value, zone: &Tz) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(number) => {
            let millis = number.as_f64()?;
            if !millis.is_finite() {
                return None;
            }
            DateTime::from_timestamp_millis(millis as i64)
        }
        Value::String(text) => parse_text(text.trim(), zone),
        _ => None,
    }
}

fn parse_text<Tz: TimeZone>(text: &str, zone: &Tz) -> Option<DateTime<Utc>> {
    if text.is_empty() {
        return None;
    }

    if text.bytes().all(|b| b.is_ascii_digit()) {
        let epoch: i64 = text.parse().ok()?;
        return if text.len() <= 10 {
            DateTime::from_timestamp(epoch, 0)
        } else {
            DateTime::from_timestamp_millis(epoch)
        };
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            // Skipped local times (DST gaps) are unreadable
            return zone
                .from_local_datetime(&parsed)
                .earliest()
                .map(|local| local.with_timezone(&Utc));
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}

/// Builds the "Last updated" line in the viewer's zone, e.g.
/// `Last updated: 5/1/2024, 2:00:00 PM`.
pub fn format_last_updated<Tz>(timestamp: Option<DateTime<Utc>>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match timestamp {
        Some(timestamp) => format!(
            "Last updated: {}",
            timestamp
                .with_timezone(zone)
                .format("%-m/%-d/%Y, %-I:%M:%S %p")
        ),
        None => format!("Last updated: {}", INVALID_DATE),
    }
}
