//! Timestamp helpers.
//!
//! The API stores times as epoch milliseconds in strings and GitHub returns
//! RFC 3339; the console shows both as `YYYY-MM-DD HH:mm:ss` in local time.

use std::fmt::Display;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, TimeZone};

/// Display format used by every table and timeline.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format an epoch-millisecond string in local time.
///
/// Unparsable input is returned unchanged.
pub fn format_epoch_ms(raw: &str) -> String {
    format_epoch_ms_in(raw, &Local)
}

/// Format an epoch-millisecond string in `tz`.
pub fn format_epoch_ms_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|ms| tz.timestamp_millis_opt(ms).single())
        .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Format an RFC 3339 timestamp in `tz`.
pub fn format_rfc3339_in<Tz>(raw: &str, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let parsed = DateTime::parse_from_rfc3339(raw.trim()).ok()?;
    Some(parsed.with_timezone(tz).format(DISPLAY_FORMAT).to_string())
}

/// First millisecond of a `YYYY-MM-DD` day in `tz`.
pub fn day_start_ms<Tz: TimeZone>(date: &str, tz: &Tz) -> Option<i64> {
    let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let start = day.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&start)
        .earliest()
        .map(|dt| dt.timestamp_millis())
}

/// Last millisecond of a `YYYY-MM-DD` day in `tz`.
pub fn day_end_ms<Tz: TimeZone>(date: &str, tz: &Tz) -> Option<i64> {
    let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let end = day.and_hms_milli_opt(23, 59, 59, 999)?;
    tz.from_local_datetime(&end)
        .latest()
        .map(|dt| dt.timestamp_millis())
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    Local::now().timestamp_millis()
}

/// Current local year.
pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::*;

    #[test]
    fn epoch_ms_string_formats_in_given_zone() {
        let shanghai = FixedOffset::east_opt(8 * 3600).expect("valid offset");
        assert_eq!(format_epoch_ms_in("0", &Utc), "1970-01-01 00:00:00");
        assert_eq!(format_epoch_ms_in("0", &shanghai), "1970-01-01 08:00:00");
    }

    #[test]
    fn unparsable_epoch_is_returned_as_is() {
        assert_eq!(format_epoch_ms_in("soon", &Utc), "soon");
    }

    #[test]
    fn rfc3339_is_converted_to_target_zone() {
        let shanghai = FixedOffset::east_opt(8 * 3600).expect("valid offset");
        assert_eq!(
            format_rfc3339_in("2024-05-01T16:30:00Z", &shanghai).as_deref(),
            Some("2024-05-02 00:30:00")
        );
        assert_eq!(format_rfc3339_in("yesterday", &Utc), None);
    }

    #[test]
    fn day_bounds_cover_the_whole_day() {
        let start = day_start_ms("2024-01-02", &Utc).expect("start");
        let end = day_end_ms("2024-01-02", &Utc).expect("end");
        assert_eq!(start, 1_704_153_600_000);
        assert_eq!(end - start, 86_400_000 - 1);
        assert_eq!(day_start_ms("2024-13-40", &Utc), None);
        assert_eq!(day_end_ms("", &Utc), None);
    }
}
