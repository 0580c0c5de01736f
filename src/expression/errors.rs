use thiserror::Error;

/// Reasons an expression has no valid value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Division does not land on an integer")]
    InexactDivision,
    #[error("Exponent exceeds the allowed maximum")]
    ExponentTooLarge,
    #[error("Zero raised to a negative power")]
    ZeroToNegativePower,
    #[error("Complex result from negative base with fractional exponent")]
    ComplexResult,
    #[error("Factorial operand must be an integer between 0 and 100")]
    FactorialDomain,
    #[error("Nested factorial of a value below 3")]
    RedundantFactorial,
    #[error("Result is not representable")]
    Overflow,
}
