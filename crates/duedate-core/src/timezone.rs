use crate::error::CoreError;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

/// Parse an IANA timezone name
pub fn parse_timezone(timezone: &str) -> Result<Tz, CoreError> {
    Tz::from_str(timezone)
        .map_err(|_| CoreError::InvalidTimezone(format!("Invalid timezone: {}", timezone)))
}

/// Validate IANA timezone name
pub fn validate_timezone(timezone: &str) -> Result<(), CoreError> {
    parse_timezone(timezone).map(|_| ())
}

/// Re-express an instant in the reference zone.
///
/// The offset comes from the timezone database for that exact instant, so the
/// zone's daylight-saving rules for the date in question are applied.
pub fn normalize<Z: TimeZone>(instant: &DateTime<Z>, tz: Tz) -> DateTime<Tz> {
    instant.with_timezone(&tz)
}

/// Resolve a wall-clock reading in `tz`.
///
/// Ambiguous readings (fall back) take the earliest mapping. Readings that do
/// not exist (spring forward) move one hour later.
pub fn local_at(tz: Tz, date: NaiveDate, time: NaiveTime) -> Result<DateTime<Tz>, CoreError> {
    let target_naive = date.and_time(time);

    if let Some(local_dt) = tz.from_local_datetime(&target_naive).earliest() {
        return Ok(local_dt);
    }

    let shifted = target_naive + Duration::hours(1);
    tz.from_local_datetime(&shifted).earliest().ok_or_else(|| {
        CoreError::InvalidTimezone(format!(
            "Local time {} does not exist in {}",
            target_naive, tz
        ))
    })
}

/// Get timezone offset string for display (e.g., "-05:00")
pub fn get_timezone_offset(tz: Tz, at_time: DateTime<Utc>) -> String {
    at_time.with_timezone(&tz).format("%:z").to_string()
}

/// Get timezone abbreviation (e.g., "EST", "EDT")
pub fn get_timezone_abbreviation(tz: Tz, at_time: DateTime<Utc>) -> String {
    at_time.with_timezone(&tz).format("%Z").to_string()
}

/// Format an instant as wall-clock time in `tz`
pub fn format_with_timezone<Z: TimeZone>(datetime: &DateTime<Z>, tz: Tz, format: &str) -> String {
    datetime.with_timezone(&tz).format(format).to_string()
}
