use chrono_tz::Tz;
use duedate_core::error::CoreError;
use duedate_core::timezone::parse_timezone;

/// Detect system timezone
pub fn detect_system_timezone() -> Tz {
    // Try multiple detection methods
    if let Ok(tz) = std::env::var("TZ") {
        if let Ok(parsed) = parse_timezone(&tz) {
            return parsed;
        }
    }

    if let Ok(tz) = iana_time_zone::get_timezone() {
        if let Ok(parsed) = parse_timezone(&tz) {
            return parsed;
        }
    }

    tracing::debug!("could not detect system timezone, using UTC");
    Tz::UTC
}

/// Get common timezones for suggestions
pub fn get_common_timezones() -> Vec<&'static str> {
    vec![
        "UTC",
        "America/New_York",
        "America/Chicago",
        "America/Denver",
        "America/Los_Angeles",
        "America/Toronto",
        "Europe/London",
        "Europe/Paris",
        "Europe/Berlin",
        "Asia/Tokyo",
        "Asia/Shanghai",
        "Asia/Kolkata",
        "Australia/Sydney",
    ]
}

/// Suggest similar timezones for invalid input
pub fn suggest_timezone(invalid: &str) -> Vec<&'static str> {
    let invalid_lower = invalid.to_lowercase();

    let mut matches: Vec<_> = get_common_timezones()
        .into_iter()
        .filter(|tz| {
            let tz_lower = tz.to_lowercase();
            tz_lower.contains(&invalid_lower)
                || invalid_lower.contains(&tz_lower)
                || tz.split('/').any(|part| part.to_lowercase().contains(&invalid_lower))
        })
        .collect();

    matches.truncate(5);
    matches
}

/// Convert user-friendly timezone input to an IANA zone
pub fn normalize_timezone_input(input: &str) -> Result<Tz, CoreError> {
    if let Ok(tz) = parse_timezone(input) {
        return Ok(tz);
    }

    let normalized = match input.to_lowercase().as_str() {
        "est" | "edt" | "eastern" => "America/New_York",
        "cst" | "cdt" | "central" => "America/Chicago",
        "mst" | "mdt" | "mountain" => "America/Denver",
        "pst" | "pdt" | "pacific" => "America/Los_Angeles",
        "gmt" | "utc" => "UTC",
        "bst" | "london" => "Europe/London",
        "cet" | "paris" => "Europe/Paris",
        "jst" | "tokyo" => "Asia/Tokyo",
        _ => {
            let suggestions = suggest_timezone(input);
            return Err(CoreError::InvalidTimezone(if suggestions.is_empty() {
                format!(
                    "Unknown timezone '{}'. Use standard IANA names like 'America/New_York'",
                    input
                )
            } else {
                format!(
                    "Unknown timezone '{}'. Did you mean: {}?",
                    input,
                    suggestions.join(", ")
                )
            }));
        }
    };

    parse_timezone(normalized)
}
