use anyhow::Result;
use duedate_core::due_date::{DueDateCalculator, TurnaroundHours};

use crate::cli::CalcCommand;
use crate::config::Config;
use crate::parser::parse_submission;
use crate::util::resolve_input_timezone;
use crate::views::report::display_due_date;

pub fn calculate(command: CalcCommand, config: &Config) -> Result<()> {
    let calculator = DueDateCalculator::new(&config.calendar)?;
    let input_tz = resolve_input_timezone(command.submission.tz.as_deref(), config)?;
    let submitted = parse_submission(
        &command.submission.submitted,
        command.submission.meridiem,
        input_tz,
    )?;
    let turnaround = TurnaroundHours::new(command.hours)?;

    let due = calculator.calculate_due_date(&submitted, turnaround)?;
    display_due_date(&due, turnaround);

    Ok(())
}
