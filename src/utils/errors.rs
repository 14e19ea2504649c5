use thiserror::Error;

/// Ways the game input can break the rules
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Expected {expected} numbers to use but got {actual}")]
    WrongNumberCount { expected: usize, actual: usize },
    #[error("Target number must be in the range {min} to {max} inclusive, got {target}")]
    TargetOutOfRange { target: i64, min: i64, max: i64 },
    #[error("Numbers to use must be in the range 1 to 10 inclusive, or 25, 50, 75 or 100, got {0}")]
    InvalidNumber(i64),
    #[error(
        "Too many instances of {number} - small numbers can appear twice, big numbers only once"
    )]
    TooManyInstances { number: i64, allowed: usize },
}
