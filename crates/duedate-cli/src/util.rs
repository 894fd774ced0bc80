use anyhow::Result;
use chrono_tz::Tz;

use crate::config::Config;
use crate::timezone::{detect_system_timezone, normalize_timezone_input};

/// Wall-clock format used for every instant shown to the user
pub const DISPLAY_FORMAT: &str = "%a %Y-%m-%d %H:%M:%S %Z";

/// Pick the zone naive submission times are read in:
/// `--tz`, then `input_timezone` from the config, then the system zone.
pub fn resolve_input_timezone(flag: Option<&str>, config: &Config) -> Result<Tz> {
    let tz = match flag.or(config.input_timezone.as_deref()) {
        Some(name) => normalize_timezone_input(name)?,
        None => detect_system_timezone(),
    };
    tracing::debug!(input_timezone = %tz, "resolved input timezone");
    Ok(tz)
}
