//! Date and time labels for grievance display.
//!
//! Relative labels bucket on truncated elapsed time (`floor(age / 1h)`,
//! `floor(age / 24h)`), never on calendar-day difference: 23h59m is still
//! "23 hours ago", 24h00m is "1 day ago". All formatting is in UTC.

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a backend timestamp.
///
/// RFC 3339 first; rows stored without an offset are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(raw, fmt)
            .ok()
            .map(|naive| Utc.from_utc_datetime(&naive))
    })
}

/// Human-relative label for `created_at` as seen at `now`.
///
/// | age            | label             |
/// |----------------|-------------------|
/// | < 1h           | `Just now`        |
/// | < 24h          | `N hour(s) ago`   |
/// | 1 day          | `1 day ago`       |
/// | 2..7 days      | `N days ago`      |
/// | 7..14 days     | `1 week ago`      |
/// | >= 14 days     | `Mon D`           |
///
/// A `created_at` in the future (clock skew) counts as zero age.
pub fn format_relative_date(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(created_at).max(Duration::zero());
    let hours = age.num_hours();
    let days = age.num_days();

    if hours < 1 {
        "Just now".to_string()
    } else if days < 1 {
        if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{} hours ago", hours)
        }
    } else if days == 1 {
        "1 day ago".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 14 {
        "1 week ago".to_string()
    } else {
        created_at.format("%b %-d").to_string()
    }
}

/// Timeline date, e.g. `Nov 5, 2025`.
pub fn format_timeline_date(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// Timeline time of day, e.g. `09:05 AM`.
pub fn format_timeline_time(at: DateTime<Utc>) -> String {
    at.format("%I:%M %p").to_string()
}
