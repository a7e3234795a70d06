//! Locale-style rendering of API timestamps.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt;

const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an API timestamp into `tz`.
///
/// Accepts RFC 3339, offset-less date-times (taken as wall-clock time in
/// `tz`) and bare `YYYY-MM-DD` dates (taken as UTC midnight).
pub fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(tz));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight).with_timezone(tz))
}

/// Render `raw` as `M/D/YYYY, h:mm:ss AM` in `tz`.
///
/// Unparseable input comes back unchanged.
pub fn format_timestamp<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    match parse_timestamp(raw, tz) {
        Some(parsed) => parsed.format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// Render `raw` in the host's local timezone.
pub fn format_local(raw: &str) -> String {
    format_timestamp(raw, &Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn rfc3339_renders_in_target_zone() {
        assert_eq!(
            format_timestamp("2024-01-01T00:00:00Z", &Utc),
            "1/1/2024, 12:00:00 AM"
        );
        let east = FixedOffset::east_opt(2 * 3600).expect("offset");
        assert_eq!(
            format_timestamp("2024-01-01T13:05:09Z", &east),
            "1/1/2024, 3:05:09 PM"
        );
    }

    #[test]
    fn naive_datetimes_use_wall_clock_of_zone() {
        let west = FixedOffset::west_opt(5 * 3600).expect("offset");
        assert_eq!(
            format_timestamp("2024-07-04 18:30:00.123", &west),
            "7/4/2024, 6:30:00 PM"
        );
        assert_eq!(
            format_timestamp("2024-07-04T09:00:00", &Utc),
            "7/4/2024, 9:00:00 AM"
        );
    }

    #[test]
    fn bare_dates_are_utc_midnight() {
        let west = FixedOffset::west_opt(3600).expect("offset");
        assert_eq!(
            format_timestamp("2024-03-10", &west),
            "3/9/2024, 11:00:00 PM"
        );
    }

    #[test]
    fn garbage_is_rendered_verbatim() {
        assert_eq!(format_timestamp("yesterday-ish", &Utc), "yesterday-ish");
        assert!(parse_timestamp("", &Utc).is_none());
    }
}
