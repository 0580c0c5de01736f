use thiserror::Error;

/// Errors raised while validating search parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Digit must be between 0 and 9, got {0}")]
    DigitOutOfRange(u8),
    #[error("Digit budget must be at least 1, got {0}")]
    InvalidBudget(i64),
}
