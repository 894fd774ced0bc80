use clap::Parser;
use duedate_core::error::CoreError;
use owo_colors::{OwoColorize, Style};

mod cli;
mod commands;
mod config;
mod logger;
mod parser;
mod timezone;
mod util;
mod views;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    logger::init_logger(cli.verbose);

    let config = match config::Config::new(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} Invalid configuration: {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "loaded configuration");

    let result = match cli.command {
        cli::Commands::Calc(command) => commands::calc::calculate(command, &config),
        cli::Commands::Check(command) => commands::check::check_submission(command, &config),
        cli::Commands::Holidays(command) => commands::holidays::list_holidays(command, &config),
        cli::Commands::Clock(command) => commands::clock::show_clock(command, &config).await,
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::InvalidSubmission(result) => {
                views::report::display_rejection(result);
            }
            CoreError::InvalidTimezone(s) => {
                eprintln!("{} {}", "Error:".style(error_style), s);
            }
            CoreError::InvalidTurnaround(s) => {
                eprintln!("{} Invalid turnaround: {}", "Error:".style(error_style), s);
            }
            CoreError::DateOutOfRange(s) => {
                eprintln!(
                    "{} Due date is out of range ({}); use a smaller turnaround",
                    "Error:".style(error_style),
                    s
                );
            }
            CoreError::CorrectionLimitExceeded { iterations } => {
                eprintln!(
                    "{} Could not find a business slot within {} correction steps",
                    "Error:".style(error_style),
                    iterations.yellow()
                );
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {}", "Error:".style(error_style), err);
    }
}
