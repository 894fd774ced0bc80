use chrono::{DateTime, Datelike, Timelike, Weekday};
use chrono_tz::Tz;
use std::fmt;

use crate::config::BusinessHours;
use crate::holiday;

/// One axis on which a submission can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    OutsideBusinessHours,
    NonBusinessWeekday,
    Holiday,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::OutsideBusinessHours => write!(f, "outside business hours"),
            ValidationFailure::NonBusinessWeekday => write!(f, "not a business weekday"),
            ValidationFailure::Holiday => write!(f, "on a holiday"),
        }
    }
}

/// Outcome of the three submission checks. Each flag is evaluated
/// independently so several can fail at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub time_valid: bool,
    pub weekday_valid: bool,
    pub holiday_valid: bool,
}

impl ValidationResult {
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.time_valid && self.weekday_valid && self.holiday_valid
    }

    /// The failed axes, in time / weekday / holiday order.
    pub fn failures(&self) -> impl Iterator<Item = ValidationFailure> {
        [
            (!self.time_valid).then_some(ValidationFailure::OutsideBusinessHours),
            (!self.weekday_valid).then_some(ValidationFailure::NonBusinessWeekday),
            (!self.holiday_valid).then_some(ValidationFailure::Holiday),
        ]
        .into_iter()
        .flatten()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "valid");
        }
        let failures: Vec<String> = self.failures().map(|failure| failure.to_string()).collect();
        write!(f, "{}", failures.join(", "))
    }
}

/// Whether the wall-clock time lies within `[open, close]`.
///
/// The closing hour itself is only valid at exactly `close:00:00.000`.
pub fn is_time_valid(local: &DateTime<Tz>, hours: &BusinessHours) -> bool {
    let hour = local.hour();
    if hour == hours.close_hour {
        return local.minute() == 0 && local.second() == 0 && local.nanosecond() == 0;
    }
    hour >= hours.open_hour && hour < hours.close_hour
}

pub fn is_weekday_valid(local: &DateTime<Tz>) -> bool {
    !matches!(local.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_holiday_valid(local: &DateTime<Tz>) -> bool {
    !holiday::is_holiday(local.date_naive())
}

/// Run all three checks on an instant already normalized to the reference zone.
pub fn validate(local: &DateTime<Tz>, hours: &BusinessHours) -> ValidationResult {
    let result = ValidationResult {
        time_valid: is_time_valid(local, hours),
        weekday_valid: is_weekday_valid(local),
        holiday_valid: is_holiday_valid(local),
    };
    tracing::trace!(instant = %local, ?result, "validated instant");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use chrono_tz::America::New_York;
    use rstest::rstest;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Tz> {
        New_York.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[rstest]
    #[case(local(2023, 5, 24, 9, 0, 0), true)]
    #[case(local(2023, 5, 24, 12, 30, 0), true)]
    #[case(local(2023, 5, 24, 16, 59, 59), true)]
    #[case(local(2023, 5, 24, 17, 0, 0), true)]
    #[case(local(2023, 5, 24, 17, 0, 1), false)]
    #[case(local(2023, 5, 24, 17, 1, 0), false)]
    #[case(local(2023, 5, 24, 8, 59, 59), false)]
    #[case(local(2023, 5, 24, 0, 0, 0), false)]
    #[case(local(2023, 5, 24, 23, 0, 0), false)]
    fn test_time_validity(#[case] instant: DateTime<Tz>, #[case] expected: bool) {
        assert_eq!(is_time_valid(&instant, &BusinessHours::default()), expected);
    }

    #[test]
    fn test_millisecond_boundaries() {
        let hours = BusinessHours::default();
        let close = local(2023, 5, 24, 17, 0, 0);
        let open = local(2023, 5, 24, 9, 0, 0);

        assert!(is_time_valid(&close, &hours));
        assert!(!is_time_valid(&(close + Duration::milliseconds(1)), &hours));
        assert!(is_time_valid(&open, &hours));
        assert!(!is_time_valid(&(open - Duration::milliseconds(1)), &hours));
    }

    #[rstest]
    #[case(local(2023, 5, 22, 10, 0, 0), true)] // Monday
    #[case(local(2023, 5, 26, 10, 0, 0), true)] // Friday
    #[case(local(2023, 5, 27, 10, 0, 0), false)] // Saturday
    #[case(local(2023, 5, 28, 10, 0, 0), false)] // Sunday
    fn test_weekday_validity(#[case] instant: DateTime<Tz>, #[case] expected: bool) {
        assert_eq!(is_weekday_valid(&instant), expected);
    }

    #[test]
    fn test_before_opening_fails_time_only() {
        let result = validate(&local(2023, 5, 24, 8, 15, 0), &BusinessHours::default());
        assert!(!result.time_valid);
        assert!(result.weekday_valid);
        assert!(result.holiday_valid);
        assert_eq!(
            result.failures().collect::<Vec<_>>(),
            vec![ValidationFailure::OutsideBusinessHours]
        );
    }

    #[test]
    fn test_independence_day_on_tuesday() {
        let result = validate(&local(2023, 7, 4, 10, 0, 0), &BusinessHours::default());
        assert!(result.time_valid);
        assert!(result.weekday_valid);
        assert!(!result.holiday_valid);
    }

    #[test]
    fn test_multiple_failures_reported() {
        // Christmas 2022 fell on a Sunday
        let result = validate(&local(2022, 12, 25, 20, 0, 0), &BusinessHours::default());
        assert_eq!(
            result,
            ValidationResult {
                time_valid: false,
                weekday_valid: false,
                holiday_valid: false,
            }
        );
        assert_eq!(
            result.to_string(),
            "outside business hours, not a business weekday, on a holiday"
        );
    }

    #[test]
    fn test_valid_slot_is_all_true() {
        let result = validate(&local(2023, 5, 24, 9, 15, 5), &BusinessHours::default());
        assert!(result.is_valid());
        assert_eq!(result.failures().count(), 0);
        assert_eq!(result.to_string(), "valid");
    }
}
