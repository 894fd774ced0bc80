use chrono::DateTime;
use chrono_humanize::{Accuracy, HumanTime, Tense};
use chrono_tz::Tz;
use duedate_core::due_date::{DueDate, TurnaroundHours};
use duedate_core::timezone::format_with_timezone;
use duedate_core::validation::ValidationResult;
use owo_colors::{OwoColorize, Style};

use crate::util::DISPLAY_FORMAT;

pub fn display_due_date(due: &DueDate, turnaround: TurnaroundHours) {
    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();
    let subtle_style = Style::new().bright_black();

    let tz = due.due_at.timezone();
    let display = |instant: &DateTime<Tz>| format_with_timezone(instant, tz, DISPLAY_FORMAT);
    let (days, hours) = turnaround.decompose();
    let span = HumanTime::from(due.due_at - due.submitted_at).to_text_en(Accuracy::Rough, Tense::Present);

    println!(
        "{} Due: {}",
        "✓".style(success_style),
        display(&due.due_at).bright_white().bold()
    );
    println!(
        "  {} Submitted:  {}",
        "→".style(info_style),
        display(&due.submitted_at)
    );
    println!(
        "  {} Turnaround: {} ({} business days + {} hours)",
        "→".style(info_style),
        turnaround,
        days,
        hours
    );
    println!("  {} Elapsed:    {}", "→".style(info_style), span);

    if due.iterations > 0 {
        println!(
            "  {}",
            format!(
                "Moved from {} after {} correction steps",
                display(&due.naive_target),
                due.iterations
            )
            .style(subtle_style)
        );
    }
}

pub fn display_rejection(result: &ValidationResult) {
    let error_style = Style::new().red().bold();

    eprintln!("{} Submission rejected:", "Error:".style(error_style));
    for failure in result.failures() {
        eprintln!("  {} {}", "✗".red(), failure);
    }
}
