//! Fixed-format labels for grid headers.
//!
//! No locale handling: weekday names are always English abbreviations.

use chrono::TimeZone;

use crate::error::Result;
use crate::timestamp::Timestamp;

/// Render the local time of day as `HH:MM`, 24-hour, zero-padded.
pub fn to_time_value<Tz: TimeZone>(tz: &Tz, at: Timestamp) -> Result<String> {
    Ok(at.local_time(tz)?.format("%H:%M").to_string())
}

/// Render the local date as a three-letter weekday and two-digit day of month,
/// e.g. `Sat 01`.
pub fn to_short_date<Tz: TimeZone>(tz: &Tz, at: Timestamp) -> Result<String> {
    Ok(at.local_date(tz)?.format("%a %d").to_string())
}
