use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Business-hour due date calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging of the correction loop
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a configuration file (defaults to ./duedate.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Calculate the due date for a submission
    Calc(CalcCommand),
    /// Check whether a submission time is accepted
    Check(CheckCommand),
    /// List the observed holidays of a year
    Holidays(HolidaysCommand),
    /// Show the current time in the reference timezone
    Clock(ClockCommand),
}

/// How a submission time is given on the command line
#[derive(Args, Debug, Clone)]
pub struct SubmissionArgs {
    /// Submission time: RFC 3339, "YYYY-MM-DD HH:MM[:SS]", or e.g. "now", "tomorrow 10am"
    pub submitted: String,
    /// Read the time as a 12-hour clock reading
    #[arg(long, value_enum)]
    pub meridiem: Option<Meridiem>,
    /// Timezone the submission time is given in (IANA format or a common abbreviation)
    #[arg(long, help = "Input timezone (IANA format, e.g. 'Europe/Paris', or 'est', 'pst')")]
    pub tz: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CalcCommand {
    #[command(flatten)]
    pub submission: SubmissionArgs,
    /// Turnaround in business hours
    #[arg(short = 'H', long)]
    pub hours: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct CheckCommand {
    #[command(flatten)]
    pub submission: SubmissionArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct HolidaysCommand {
    /// Year to list (defaults to the current year)
    #[arg(short, long)]
    pub year: Option<i32>,
}

#[derive(Parser, Debug, Clone)]
pub struct ClockCommand {
    /// Keep ticking every second until interrupted
    #[arg(short, long)]
    pub watch: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Convert a 12-hour clock hour (1-12) to a 24-hour clock hour.
    pub fn to_24h(self, hour: u32) -> Option<u32> {
        if !(1..=12).contains(&hour) {
            return None;
        }
        Some(match (self, hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) => h,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
        })
    }
}

impl std::fmt::Display for Meridiem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[rstest]
    #[case(Meridiem::Am, 12, Some(0))]
    #[case(Meridiem::Am, 9, Some(9))]
    #[case(Meridiem::Pm, 12, Some(12))]
    #[case(Meridiem::Pm, 1, Some(13))]
    #[case(Meridiem::Pm, 5, Some(17))]
    #[case(Meridiem::Pm, 0, None)]
    #[case(Meridiem::Am, 13, None)]
    fn test_meridiem_to_24h(#[case] meridiem: Meridiem, #[case] hour: u32, #[case] expected: Option<u32>) {
        assert_eq!(meridiem.to_24h(hour), expected);
    }

    #[test]
    fn test_parse_calc_command() {
        let cli = Cli::try_parse_from([
            "duedate", "calc", "2023-05-24 1:15:05", "--meridiem", "pm", "--hours", "21",
        ])
        .unwrap();

        match cli.command {
            Commands::Calc(command) => {
                assert_eq!(command.hours, 21);
                assert_eq!(command.submission.meridiem, Some(Meridiem::Pm));
                assert_eq!(command.submission.submitted, "2023-05-24 1:15:05");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
