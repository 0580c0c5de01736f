//! Utils module split into submodules

mod digits;
mod errors;
mod factors;
mod validation;

pub use digits::digits_to_number;
pub use errors::UtilsError;
pub use factors::{neighbor_offsets, proper_divisors};
pub use validation::{validate_budget, validate_digit};
