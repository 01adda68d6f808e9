//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Phrasing of relative times
///
/// `Auto` uses words where English has them ("yesterday", "now");
/// `Always` keeps everything numeric ("1 day ago", "0 seconds ago").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativeTimeStyle {
    #[default]
    Auto,
    Always,
}

/// Unit chosen for a relative time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Day,
    Hour,
    Minute,
    Second,
}

impl TimeUnit {
    fn name(self) -> &'static str {
        match self {
            TimeUnit::Day => "day",
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
            TimeUnit::Second => "second",
        }
    }
}

/// Pick the coarsest unit whose magnitude is strictly greater than 1
///
/// `diff_seconds` is signed, positive meaning the past. Returns the signed
/// amount in the chosen unit (not yet rounded) and the unit.
///
/// The comparison is strict, so exactly one day falls through to hours.
pub fn select_unit(diff_seconds: f64) -> (f64, TimeUnit) {
    let minutes = diff_seconds / 60.0;
    let hours = minutes / 60.0;
    let days = hours / 24.0;

    if days.abs() > 1.0 {
        (days, TimeUnit::Day)
    } else if hours.abs() > 1.0 {
        (hours, TimeUnit::Hour)
    } else if minutes.abs() > 1.0 {
        (minutes, TimeUnit::Minute)
    } else {
        (diff_seconds, TimeUnit::Second)
    }
}

/// Format `timestamp` relative to `now` ("3 days ago", "in 10 minutes")
///
/// Uses [`RelativeTimeStyle::Auto`]. Total for every pair of instants.
///
/// # Examples
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use themedeck::logic::formatting::format_relative_time;
///
/// let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
///
/// assert_eq!(format_relative_time(now - Duration::hours(36), now), "2 days ago");
/// assert_eq!(format_relative_time(now - Duration::hours(23), now), "23 hours ago");
/// assert_eq!(format_relative_time(now - Duration::days(1), now), "24 hours ago");
/// assert_eq!(format_relative_time(now + Duration::minutes(10), now), "in 10 minutes");
/// ```
pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_relative_time_with(RelativeTimeStyle::Auto, timestamp, now)
}

/// Format `timestamp` relative to `now` in the given style
pub fn format_relative_time_with(
    style: RelativeTimeStyle,
    timestamp: DateTime<Utc>,
    now: DateTime<Utc>,
) -> String {
    let diff_seconds = now.signed_duration_since(timestamp).num_milliseconds() as f64 / 1000.0;
    let (amount, unit) = select_unit(diff_seconds);

    let past = amount >= 0.0;
    let magnitude = amount.abs().round() as u64;

    if style == RelativeTimeStyle::Auto {
        if let Some(word) = idiomatic_phrase(unit, magnitude, past) {
            return word.to_string();
        }
    }

    let unit_name = if magnitude == 1 {
        unit.name().to_string()
    } else {
        format!("{}s", unit.name())
    };

    if past {
        format!("{} {} ago", magnitude, unit_name)
    } else {
        format!("in {} {}", magnitude, unit_name)
    }
}

/// English words for "0 seconds" and "1 day" in auto style
///
/// Minutes, hours and days are only selected above a magnitude of 1, so
/// their rounded amount is never 0.
fn idiomatic_phrase(unit: TimeUnit, magnitude: u64, past: bool) -> Option<&'static str> {
    match (unit, magnitude, past) {
        (TimeUnit::Second, 0, _) => Some("now"),
        (TimeUnit::Day, 1, true) => Some("yesterday"),
        (TimeUnit::Day, 1, false) => Some("tomorrow"),
        _ => None,
    }
}
