use anyhow::{anyhow, Result};
use duedate_core::due_date::DueDateCalculator;
use duedate_core::error::CoreError;
use duedate_core::timezone::format_with_timezone;
use owo_colors::{OwoColorize, Style};

use crate::cli::CheckCommand;
use crate::config::Config;
use crate::parser::parse_submission;
use crate::util::{resolve_input_timezone, DISPLAY_FORMAT};

pub fn check_submission(command: CheckCommand, config: &Config) -> Result<()> {
    let calculator = DueDateCalculator::new(&config.calendar)?;
    let input_tz = resolve_input_timezone(command.submission.tz.as_deref(), config)?;
    let submitted = parse_submission(
        &command.submission.submitted,
        command.submission.meridiem,
        input_tz,
    )?;

    println!(
        "Submission: {}",
        format_with_timezone(&submitted, calculator.timezone(), DISPLAY_FORMAT)
            .bright_white()
            .bold()
    );

    let result = calculator.validate_submission(&submitted);
    if !result.is_valid() {
        return Err(anyhow!(CoreError::InvalidSubmission(result)));
    }

    println!(
        "{} Accepted: within business hours on a business day",
        "✓".style(Style::new().green().bold())
    );
    Ok(())
}
