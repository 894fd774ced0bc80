use thiserror::Error;

use crate::validation::ValidationResult;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid submission: {0}")]
    InvalidSubmission(ValidationResult),

    #[error("Invalid turnaround: {0}")]
    InvalidTurnaround(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    #[error("Due date correction did not converge after {iterations} iterations")]
    CorrectionLimitExceeded { iterations: u32 },
}
