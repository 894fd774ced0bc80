use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// Test harness running the CLI inside an isolated working directory,
/// so no stray `duedate.toml` is picked up
pub struct CliTestHarness {
    temp_dir: TempDir,
}

impl CliTestHarness {
    /// Create a new test harness with an empty working directory
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        Self { temp_dir }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("duedate").expect("Failed to find duedate binary");
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("DUEDATE_INPUT_TIMEZONE");
        cmd.env_remove("DUEDATE_CALENDAR__TIMEZONE");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Working directory of this test instance
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a configuration file into the working directory
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.dir().join("duedate.toml"), contents)
            .expect("Failed to write config file");
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error").or(predicate::str::contains("error"))
    }

    /// Predicate to check that a due date was printed
    pub fn due_date_printed(expected: &str) -> impl Predicate<str> {
        predicate::str::contains("Due:").and(predicate::str::contains(expected.to_string()))
    }
}
