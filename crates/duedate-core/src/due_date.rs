use chrono::{DateTime, Duration, NaiveTime, TimeZone};
use chrono_tz::Tz;
use std::fmt;

use crate::config::{BusinessHours, CalendarConfig, BUSINESS_DAY_HOURS, MAX_CORRECTION_ITERATIONS};
use crate::error::CoreError;
use crate::timezone::{local_at, normalize};
use crate::validation::{self, ValidationResult};

/// A positive number of business hours owed after submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TurnaroundHours(u32);

impl TurnaroundHours {
    /// Zero hours is rejected: a turnaround must owe at least one business hour.
    pub fn new(hours: u32) -> Result<Self, CoreError> {
        if hours == 0 {
            return Err(CoreError::InvalidTurnaround(
                "turnaround must be at least 1 hour".to_string(),
            ));
        }
        Ok(Self(hours))
    }

    /// Split into whole business days and remaining hours.
    #[inline]
    pub fn decompose(&self) -> (u32, u32) {
        (self.0 / BUSINESS_DAY_HOURS, self.0 % BUSINESS_DAY_HOURS)
    }
}

impl TryFrom<u32> for TurnaroundHours {
    type Error = CoreError;

    fn try_from(hours: u32) -> Result<Self, Self::Error> {
        Self::new(hours)
    }
}

impl fmt::Display for TurnaroundHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.0)
    }
}

/// Result of a successful calculation. All instants are in the reference zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueDate {
    /// The submission, normalized to the reference zone
    pub submitted_at: DateTime<Tz>,
    /// Submission plus elapsed time, before any calendar correction
    pub naive_target: DateTime<Tz>,
    /// First instant reached from the naive target that lies in a business slot
    pub due_at: DateTime<Tz>,
    /// Correction steps taken to get from `naive_target` to `due_at`
    pub iterations: u32,
}

/// DueDateCalculator: computes due dates against one business calendar.
///
/// Holds only the validated reference zone, business hours and loop guard, so
/// a single calculator can be shared freely between callers.
#[derive(Debug, Clone)]
pub struct DueDateCalculator {
    timezone: Tz,
    hours: BusinessHours,
    max_iterations: u32,
}

impl Default for DueDateCalculator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl DueDateCalculator {
    pub fn new(config: &CalendarConfig) -> Result<Self, CoreError> {
        let timezone = config.validate()?;
        Ok(Self {
            timezone,
            hours: config.business_hours(),
            max_iterations: config.max_iterations,
        })
    }

    /// Calculator for 09:00-17:00 in America/New_York.
    pub fn with_defaults() -> Self {
        Self {
            timezone: chrono_tz::America::New_York,
            hours: BusinessHours::default(),
            max_iterations: MAX_CORRECTION_ITERATIONS,
        }
    }

    #[inline]
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    #[inline]
    pub fn business_hours(&self) -> BusinessHours {
        self.hours
    }

    /// Run the submission checks against an instant given in any zone.
    pub fn validate_submission<Z: TimeZone>(&self, submission: &DateTime<Z>) -> ValidationResult {
        validation::validate(&normalize(submission, self.timezone), &self.hours)
    }

    /// Whether `instant` satisfies the time, weekday and holiday checks together.
    pub fn is_business_slot<Z: TimeZone>(&self, instant: &DateTime<Z>) -> bool {
        self.validate_submission(instant).is_valid()
    }

    /// Compute the due date for a submission.
    ///
    /// # Errors
    /// * `CoreError::InvalidSubmission` if the submission itself is not in a
    ///   business slot; every failed check is reported.
    /// * `CoreError::CorrectionLimitExceeded` if the correction loop does not
    ///   settle within the configured number of steps.
    pub fn calculate_due_date<Z: TimeZone>(
        &self,
        submission: &DateTime<Z>,
        turnaround: TurnaroundHours,
    ) -> Result<DueDate, CoreError> {
        let submitted_at = normalize(submission, self.timezone);

        let validation = validation::validate(&submitted_at, &self.hours);
        if !validation.is_valid() {
            tracing::debug!(submitted_at = %submitted_at, %validation, "rejected submission");
            return Err(CoreError::InvalidSubmission(validation));
        }

        let (days, remainder_hours) = turnaround.decompose();
        let naive_target = shift(
            &submitted_at,
            Duration::hours(24 * i64::from(days) + i64::from(remainder_hours)),
        )?;

        let (due_at, iterations) = self.advance(naive_target)?;

        tracing::debug!(
            submitted_at = %submitted_at,
            %turnaround,
            naive_target = %naive_target,
            due_at = %due_at,
            iterations,
            "calculated due date"
        );

        Ok(DueDate {
            submitted_at,
            naive_target,
            due_at,
            iterations,
        })
    }

    /// Move `candidate` forward until it lands in a business slot.
    ///
    /// Days are always exactly 24 hours here; the wall-clock shift of a DST
    /// transition is corrected like any other out-of-hours time.
    fn advance(&self, mut candidate: DateTime<Tz>) -> Result<(DateTime<Tz>, u32), CoreError> {
        let day = Duration::hours(24);
        let mut iterations = 0;

        while !validation::validate(&candidate, &self.hours).is_valid() {
            while !validation::is_weekday_valid(&candidate)
                || !validation::is_holiday_valid(&candidate)
            {
                self.count_step(&mut iterations)?;
                tracing::debug!(candidate = %candidate, "not a business day, skipping to next day");
                candidate = shift(&candidate, day)?;
            }

            while !validation::is_time_valid(&candidate, &self.hours) {
                self.count_step(&mut iterations)?;
                tracing::debug!(candidate = %candidate, "outside business hours, carrying overflow");
                let overflow = self.time_since_close(&candidate)?;
                candidate = shift(&self.opening_on(&shift(&candidate, day)?)?, overflow)?;
            }
        }

        Ok((candidate, iterations))
    }

    fn count_step(&self, iterations: &mut u32) -> Result<(), CoreError> {
        *iterations += 1;
        if *iterations > self.max_iterations {
            tracing::warn!(iterations = *iterations, "due date correction did not converge");
            return Err(CoreError::CorrectionLimitExceeded {
                iterations: self.max_iterations,
            });
        }
        Ok(())
    }

    /// Elapsed time since the most recent close at or before `candidate`.
    ///
    /// Before the close of the candidate's own day, that is the previous
    /// calendar day's close.
    fn time_since_close(&self, candidate: &DateTime<Tz>) -> Result<Duration, CoreError> {
        let close_time = hour_of_day(self.hours.close_hour)?;
        let today = candidate.date_naive();

        let mut close = local_at(self.timezone, today, close_time)?;
        if close > *candidate {
            let yesterday = today.pred_opt().ok_or_else(|| {
                CoreError::InvalidConfig(format!("no calendar day before {}", today))
            })?;
            close = local_at(self.timezone, yesterday, close_time)?;
        }

        Ok(*candidate - close)
    }

    /// The opening instant on the calendar day of `instant`.
    fn opening_on(&self, instant: &DateTime<Tz>) -> Result<DateTime<Tz>, CoreError> {
        local_at(self.timezone, instant.date_naive(), hour_of_day(self.hours.open_hour)?)
    }
}

/// `instant + by`, or `DateOutOfRange` past the last representable date.
fn shift(instant: &DateTime<Tz>, by: Duration) -> Result<DateTime<Tz>, CoreError> {
    instant
        .checked_add_signed(by)
        .ok_or_else(|| CoreError::DateOutOfRange(format!("{} + {}", instant, by)))
}

fn hour_of_day(hour: u32) -> Result<NaiveTime, CoreError> {
    NaiveTime::from_hms_opt(hour, 0, 0)
        .ok_or_else(|| CoreError::InvalidConfig(format!("invalid hour of day: {}", hour)))
}

/// Compute a due date with the default calendar (09:00-17:00, America/New_York).
pub fn calculate_due_date<Z: TimeZone>(
    submission: &DateTime<Z>,
    turnaround_hours: u32,
) -> Result<DueDate, CoreError> {
    let turnaround = TurnaroundHours::new(turnaround_hours)?;
    DueDateCalculator::with_defaults().calculate_due_date(submission, turnaround)
}
