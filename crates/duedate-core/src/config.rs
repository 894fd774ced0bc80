use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::CoreError;
use crate::timezone::parse_timezone;

/// Reference timezone every calendar rule is evaluated in.
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

/// First business hour of the day (09:00).
pub const BUSINESS_OPEN_HOUR: u32 = 9;

/// Closing hour of the business day (17:00:00.000 is the last valid instant).
pub const BUSINESS_CLOSE_HOUR: u32 = 17;

/// Length of a business day used when splitting a turnaround into days and hours.
pub const BUSINESS_DAY_HOURS: u32 = 8;

/// Upper bound on correction steps before the advancer gives up.
pub const MAX_CORRECTION_ITERATIONS: u32 = 400;

/// Opening and closing hour of the business day, in reference-zone wall-clock hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    pub open_hour: u32,
    pub close_hour: u32,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            open_hour: BUSINESS_OPEN_HOUR,
            close_hour: BUSINESS_CLOSE_HOUR,
        }
    }
}

/// Configuration for the business calendar and the correction loop
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CalendarConfig {
    /// Reference timezone (IANA format)
    pub timezone: String,
    /// Opening hour of the business day
    pub open_hour: u32,
    /// Closing hour of the business day
    pub close_hour: u32,
    /// Maximum number of correction steps per calculation
    pub max_iterations: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            open_hour: BUSINESS_OPEN_HOUR,
            close_hour: BUSINESS_CLOSE_HOUR,
            max_iterations: MAX_CORRECTION_ITERATIONS,
        }
    }
}

impl CalendarConfig {
    /// Checks the configuration and returns the parsed reference zone.
    pub fn validate(&self) -> Result<Tz, CoreError> {
        let tz = parse_timezone(&self.timezone)?;

        if self.open_hour >= self.close_hour || self.close_hour > 23 {
            return Err(CoreError::InvalidConfig(format!(
                "business hours must satisfy open < close <= 23 (got {}..{})",
                self.open_hour, self.close_hour
            )));
        }
        if self.max_iterations == 0 {
            return Err(CoreError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }

        Ok(tz)
    }

    pub fn business_hours(&self) -> BusinessHours {
        BusinessHours {
            open_hour: self.open_hour,
            close_hour: self.close_hour,
        }
    }
}
