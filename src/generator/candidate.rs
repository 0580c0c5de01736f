use crate::expression::{Expression, ExpressionError};

/// An expression together with its value and digit count
#[derive(Debug, Clone)]
pub struct Candidate {
    pub expression: Expression,
    pub value: f64,
    pub digits: usize,
}

impl Candidate {
    /// # Errors
    ///
    /// Returns the evaluation error if the expression has no valid value.
    pub fn new(expression: Expression) -> Result<Self, ExpressionError> {
        let value = expression.evaluate()?;
        let digits = expression.digit_count();
        Ok(Self {
            expression,
            value,
            digits,
        })
    }

    /// The one-digit starting point of every search
    pub(crate) fn seed(digit: u8) -> Self {
        Self {
            expression: Expression::seed(digit),
            value: f64::from(digit),
            digits: 1,
        }
    }

    pub fn distance(&self, target: f64) -> f64 {
        (target - self.value).abs()
    }

    pub fn is_exact(&self, target: f64) -> bool {
        self.value == target
    }

    /// Strictly closer to `target`, or equally close with fewer digits
    pub fn is_better_approximation(&self, other: &Candidate, target: f64) -> bool {
        let (mine, theirs) = (self.distance(target), other.distance(target));
        mine < theirs || (mine == theirs && self.digits < other.digits)
    }
}
