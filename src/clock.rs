// SPDX-License-Identifier: MPL-2.0
//! Date/time formatting helpers matching the portal's header clock,
//! table cells, and relative timestamps.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, Timelike};

/// Header clock line, e.g. `Monday, January 5, 2026, 02:30 PM`.
#[must_use]
pub fn header_line(now: DateTime<Local>) -> String {
    now.format("%A, %B %-d, %Y, %I:%M %p").to_string()
}

/// Compact cell format, e.g. `Jan 5, 2026, 02:30 PM`.
#[must_use]
pub fn format_date<Tz: chrono::TimeZone>(ts: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Relative timestamp, e.g. `3 hours ago`.
///
/// Bucket thresholds follow the portal: a bucket is used once strictly more
/// than one of its unit has elapsed, so 90 seconds reads `1 minutes ago`.
#[must_use]
pub fn time_since(earlier: DateTime<Local>, now: DateTime<Local>) -> String {
    let seconds = (now - earlier).num_seconds().max(0);

    const BUCKETS: [(i64, &str); 5] = [
        (31_536_000, "years"),
        (2_592_000, "months"),
        (86_400, "days"),
        (3_600, "hours"),
        (60, "minutes"),
    ];

    for (unit, name) in BUCKETS {
        if seconds > unit {
            return format!("{} {} ago", seconds / unit, name);
        }
    }
    format!("{} seconds ago", seconds)
}

/// Default needed-by date for the new-request form: today.
#[must_use]
pub fn default_request_date(now: DateTime<Local>) -> NaiveDate {
    now.date_naive()
}

/// Default needed-by time for the new-request form: the next full hour.
#[must_use]
pub fn default_request_time(now: DateTime<Local>) -> NaiveTime {
    let next = now + Duration::hours(1);
    NaiveTime::from_hms_opt(next.hour(), 0, 0).unwrap_or_else(|| {
        // hour() is always 0..=23
        NaiveTime::MIN
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn header_line_matches_portal_format() {
        let ts = at(2026, 1, 5, 14, 30, 0);
        assert_eq!(header_line(ts), "Monday, January 5, 2026, 02:30 PM");
    }

    #[test]
    fn format_date_is_compact() {
        let ts = at(2026, 1, 5, 14, 30, 0);
        assert_eq!(format_date(ts), "Jan 5, 2026, 02:30 PM");
    }

    #[test]
    fn time_since_seconds_bucket() {
        let now = at(2026, 1, 5, 12, 0, 0);
        assert_eq!(time_since(now - Duration::seconds(45), now), "45 seconds ago");
        // 60 seconds is not strictly more than one minute
        assert_eq!(time_since(now - Duration::seconds(60), now), "60 seconds ago");
    }

    #[test]
    fn time_since_minute_and_hour_buckets() {
        let now = at(2026, 1, 5, 12, 0, 0);
        assert_eq!(time_since(now - Duration::seconds(90), now), "1 minutes ago");
        assert_eq!(time_since(now - Duration::hours(3), now), "3 hours ago");
    }

    #[test]
    fn time_since_day_month_year_buckets() {
        let now = at(2026, 6, 15, 12, 0, 0);
        assert_eq!(time_since(now - Duration::days(2), now), "2 days ago");
        assert_eq!(time_since(now - Duration::days(40), now), "1 months ago");
        assert_eq!(time_since(now - Duration::days(800), now), "2 years ago");
    }

    #[test]
    fn time_since_future_timestamp_clamps_to_zero() {
        let now = at(2026, 1, 5, 12, 0, 0);
        assert_eq!(time_since(now + Duration::hours(1), now), "0 seconds ago");
    }

    #[test]
    fn default_date_is_today() {
        let now = at(2026, 3, 10, 9, 15, 0);
        assert_eq!(default_request_date(now), now.date_naive());
    }

    #[test]
    fn default_time_is_next_full_hour() {
        let now = at(2026, 3, 10, 9, 15, 0);
        assert_eq!(
            default_request_time(now),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap()
        );
    }

    #[test]
    fn default_time_wraps_past_midnight() {
        let now = at(2026, 3, 10, 23, 40, 0);
        assert_eq!(
            default_request_time(now),
            NaiveTime::from_hms_opt(0, 0, 0).unwrap()
        );
    }
}
