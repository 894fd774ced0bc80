use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDateTime, NaiveTime, Timelike, Utc};
use chrono_english::{parse_date_string, Dialect};
use chrono_tz::Tz;
use duedate_core::timezone::local_at;

use crate::cli::Meridiem;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

fn parse_naive(input: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
}

/// Parse a submission time into an instant.
///
/// RFC 3339 input carries its own offset. Naive `YYYY-MM-DD HH:MM[:SS]` input
/// and natural-language input ("now", "tomorrow 10am") are read as wall-clock
/// time in `input_tz`. `meridiem` turns a naive reading into a 12-hour clock
/// reading.
pub fn parse_submission(input: &str, meridiem: Option<Meridiem>, input_tz: Tz) -> Result<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        if meridiem.is_some() {
            return Err(anyhow!("--meridiem cannot be combined with an RFC 3339 time"));
        }
        return Ok(instant.with_timezone(&Utc));
    }

    if let Some(naive) = parse_naive(input) {
        let naive = match meridiem {
            Some(meridiem) => apply_meridiem(naive, meridiem)?,
            None => naive,
        };
        let local = local_at(input_tz, naive.date(), naive.time())?;
        return Ok(local.with_timezone(&Utc));
    }

    if meridiem.is_some() {
        return Err(anyhow!(
            "--meridiem only applies to 'YYYY-MM-DD HH:MM[:SS]' times, got '{}'",
            input
        ));
    }

    let now = Utc::now().with_timezone(&input_tz);
    parse_date_string(input, now, Dialect::Us)
        .map(|local| local.with_timezone(&Utc))
        .map_err(|e| anyhow!("Failed to parse submission time '{}': {}", input, e))
}

fn apply_meridiem(naive: NaiveDateTime, meridiem: Meridiem) -> Result<NaiveDateTime> {
    let time = naive.time();
    let hour = meridiem.to_24h(time.hour()).ok_or_else(|| {
        anyhow!(
            "Hour {} is not a 12-hour clock reading (expected 1-12 with {})",
            time.hour(),
            meridiem
        )
    })?;
    let time = NaiveTime::from_hms_nano_opt(hour, time.minute(), time.second(), time.nanosecond())
        .ok_or_else(|| anyhow!("Invalid time of day"))?;
    Ok(naive.date().and_time(time))
}
