//! Rule-based holiday calendar.
//!
//! Observed holidays (months are 1-indexed, January = 1):
//!
//! * New Year's Day (January 1)
//! * Memorial Day (last Monday of May)
//! * Independence Day (July 4)
//! * Labor Day (first Monday of September)
//! * Thanksgiving (fourth Thursday of November)
//! * Christmas (December 25)
//!
//! Fixed-date holidays are observed on the date itself only. A July 4 that
//! falls on a Saturday is not moved to the Friday before.

use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Holiday {
    NewYearsDay,
    MemorialDay,
    IndependenceDay,
    LaborDay,
    Thanksgiving,
    Christmas,
}

impl Holiday {
    pub fn name(&self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "New Year's Day",
            Holiday::MemorialDay => "Memorial Day",
            Holiday::IndependenceDay => "Independence Day",
            Holiday::LaborDay => "Labor Day",
            Holiday::Thanksgiving => "Thanksgiving",
            Holiday::Christmas => "Christmas",
        }
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Zero-based index of this weekday's occurrence within the month
/// (0 for days 1-7, 1 for days 8-14, ...).
#[inline]
fn occurrence_in_month(day: u32) -> u32 {
    (day - 1) / 7
}

/// Returns the holiday observed on `date`, if any.
pub fn holiday_on(date: NaiveDate) -> Option<Holiday> {
    let d = date.day();
    let m = date.month();
    let w = date.weekday();

    // New Year's Day
    if m == 1 && d == 1 {
        return Some(Holiday::NewYearsDay);
    }
    // Memorial Day (last Monday of May)
    if m == 5 && w == Weekday::Mon && d >= 25 {
        return Some(Holiday::MemorialDay);
    }
    // Independence Day
    if m == 7 && d == 4 {
        return Some(Holiday::IndependenceDay);
    }
    // Labor Day (1st Monday of September)
    if m == 9 && w == Weekday::Mon && d <= 7 {
        return Some(Holiday::LaborDay);
    }
    // Thanksgiving (4th Thursday of November)
    if m == 11 && w == Weekday::Thu && occurrence_in_month(d) == 3 {
        return Some(Holiday::Thanksgiving);
    }
    // Christmas
    if m == 12 && d == 25 {
        return Some(Holiday::Christmas);
    }

    None
}

#[inline]
pub fn is_holiday(date: NaiveDate) -> bool {
    holiday_on(date).is_some()
}

/// All observed holidays of `year`, in date order.
pub fn holidays_in_year(year: i32) -> Vec<(NaiveDate, Holiday)> {
    let Some(first) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|date| date.year() == year)
        .filter_map(|date| holiday_on(date).map(|holiday| (date, holiday)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(date(2023, 1, 1), Holiday::NewYearsDay)]
    #[case(date(2023, 5, 29), Holiday::MemorialDay)]
    #[case(date(2023, 7, 4), Holiday::IndependenceDay)]
    #[case(date(2023, 9, 4), Holiday::LaborDay)]
    #[case(date(2023, 11, 23), Holiday::Thanksgiving)]
    #[case(date(2023, 12, 25), Holiday::Christmas)]
    #[case(date(2024, 5, 27), Holiday::MemorialDay)]
    #[case(date(2024, 9, 2), Holiday::LaborDay)]
    #[case(date(2024, 11, 28), Holiday::Thanksgiving)]
    fn test_holiday_rules(#[case] day: NaiveDate, #[case] expected: Holiday) {
        assert_eq!(holiday_on(day), Some(expected));
    }

    #[rstest]
    #[case(date(2023, 5, 22))] // Monday, but not the last one in May
    #[case(date(2023, 9, 11))] // second Monday of September
    #[case(date(2023, 11, 16))] // third Thursday of November
    #[case(date(2023, 11, 30))] // fifth Thursday of November
    #[case(date(2023, 7, 3))]
    #[case(date(2023, 12, 26))]
    fn test_non_holidays(#[case] day: NaiveDate) {
        assert!(!is_holiday(day));
    }

    #[test]
    fn test_fixed_dates_are_not_weekend_shifted() {
        // July 4, 2020 was a Saturday
        assert!(is_holiday(date(2020, 7, 4)));
        assert!(!is_holiday(date(2020, 7, 3)));
        // December 25, 2022 was a Sunday
        assert!(is_holiday(date(2022, 12, 25)));
        assert!(!is_holiday(date(2022, 12, 26)));
    }

    #[test]
    fn test_fixed_dates_every_year() {
        for year in 1990..2100 {
            assert!(is_holiday(date(year, 1, 1)), "Jan 1 {}", year);
            assert!(is_holiday(date(year, 7, 4)), "Jul 4 {}", year);
            assert!(is_holiday(date(year, 12, 25)), "Dec 25 {}", year);
        }
    }

    #[test]
    fn test_holidays_in_year() {
        let holidays = holidays_in_year(2023);
        assert_eq!(holidays.len(), 6);
        assert_eq!(holidays[0], (date(2023, 1, 1), Holiday::NewYearsDay));
        assert_eq!(holidays[1], (date(2023, 5, 29), Holiday::MemorialDay));
        assert_eq!(holidays[4], (date(2023, 11, 23), Holiday::Thanksgiving));
        assert_eq!(holidays[5], (date(2023, 12, 25), Holiday::Christmas));
    }

    #[test]
    fn test_each_rule_matches_once_per_year() {
        for year in 2000..2050 {
            assert_eq!(holidays_in_year(year).len(), 6, "year {}", year);
        }
    }
}
