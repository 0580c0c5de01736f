// Limits of the value model
pub const MAX_EXPONENT: f64 = 2000.0;
pub const MAX_FACTORIAL_OPERAND: f64 = 100.0;
pub const MIN_NESTED_FACTORIAL: f64 = 3.0;
pub const DIVISION_TOLERANCE: f64 = 1e-9;
