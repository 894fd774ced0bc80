use anyhow::Result;
use chrono::{Datelike, Utc};
use duedate_core::holiday::holidays_in_year;

use crate::cli::HolidaysCommand;
use crate::config::Config;
use crate::views::table::display_holidays;

pub fn list_holidays(command: HolidaysCommand, config: &Config) -> Result<()> {
    let year = match command.year {
        Some(year) => year,
        None => {
            let tz = config.calendar.validate()?;
            Utc::now().with_timezone(&tz).year()
        }
    };

    display_holidays(year, &holidays_in_year(year));
    Ok(())
}
