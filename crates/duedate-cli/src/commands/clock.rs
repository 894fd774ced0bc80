use anyhow::Result;
use chrono::Utc;
use chrono_tz::Tz;
use duedate_core::timezone::{format_with_timezone, get_timezone_offset};
use std::io::Write;
use std::time::Duration;

use crate::cli::ClockCommand;
use crate::config::Config;

fn clock_line(tz: Tz) -> String {
    let now = Utc::now();
    format!(
        "{} UTC{} ({})",
        format_with_timezone(&now, tz, "%I:%M:%S %p %Z"),
        get_timezone_offset(tz, now),
        tz.name()
    )
}

pub async fn show_clock(command: ClockCommand, config: &Config) -> Result<()> {
    let tz = config.calendar.validate()?;

    if !command.watch {
        println!("{}", clock_line(tz));
        return Ok(());
    }

    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                print!("\r{}", clock_line(tz));
                std::io::stdout().flush()?;
            }
            _ = &mut ctrl_c => {
                println!();
                break;
            }
        }
    }

    Ok(())
}
