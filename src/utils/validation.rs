use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if `digit` is not a single decimal digit.
pub fn validate_digit(digit: u8) -> Result<(), UtilsError> {
    debug!("Validating digit: {}", digit);

    if digit > 9 {
        warn!("Digit out of range: {}", digit);
        return Err(UtilsError::DigitOutOfRange(digit));
    }

    Ok(())
}

/// # Errors
///
/// Returns an error if the budget cannot hold even the one-digit seed.
pub fn validate_budget(budget: i64) -> Result<usize, UtilsError> {
    debug!("Validating digit budget: {}", budget);

    match usize::try_from(budget) {
        Ok(budget) if budget >= 1 => Ok(budget),
        _ => {
            warn!("Digit budget rejected: {}", budget);
            Err(UtilsError::InvalidBudget(budget))
        }
    }
}
