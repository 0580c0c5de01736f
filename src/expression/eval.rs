use log::debug;

use crate::expression::ast::{BinaryOp, Expression, NodeId, NodeKind};
use crate::expression::constants::{
    DIVISION_TOLERANCE, MAX_EXPONENT, MAX_FACTORIAL_OPERAND, MIN_NESTED_FACTORIAL,
};
use crate::expression::errors::ExpressionError;
use crate::utils::digits_to_number;

#[inline]
fn is_integer(value: f64) -> bool {
    if value.abs() > 2_f64.powi(52) {
        true
    } else {
        (value - value.round()).abs() < f64::EPSILON
    }
}

/// Relative closeness with no absolute slack
#[inline]
fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= DIVISION_TOLERANCE * a.abs().max(b.abs())
}

#[inline]
fn representable(value: f64) -> Result<f64, ExpressionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ExpressionError::Overflow)
    }
}

fn factorial(n: f64) -> Result<f64, ExpressionError> {
    if !(0.0..=MAX_FACTORIAL_OPERAND).contains(&n) || !is_integer(n) {
        return Err(ExpressionError::FactorialDomain);
    }
    let n = n.round() as u32;
    representable((2..=n).fold(1.0, |acc, k| acc * f64::from(k)))
}

fn apply(op: BinaryOp, left: f64, right: f64) -> Result<f64, ExpressionError> {
    match op {
        BinaryOp::Add => representable(left + right),
        BinaryOp::Sub => representable(left - right),
        BinaryOp::Mul => representable(left * right),
        BinaryOp::Div => {
            if right == 0.0 {
                return Err(ExpressionError::DivisionByZero);
            }
            let quotient = left / right;
            let rounded = quotient.round();
            if !is_close(quotient, rounded) {
                return Err(ExpressionError::InexactDivision);
            }
            representable(rounded)
        }
        BinaryOp::Pow => {
            if right > MAX_EXPONENT {
                Err(ExpressionError::ExponentTooLarge)
            } else if left == 0.0 && right < 0.0 {
                Err(ExpressionError::ZeroToNegativePower)
            } else if left < 0.0 && !is_integer(right) {
                Err(ExpressionError::ComplexResult)
            } else {
                representable(left.powf(right))
            }
        }
    }
}

impl Expression {
    /// # Errors
    ///
    /// Returns the reason the expression has no value: a zero or inexact
    /// division, an out-of-range power or factorial, a redundant nested
    /// factorial, or a result beyond the largest finite `f64`.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        let result = self.evaluate_node(self.root);
        if let Err(e) = &result {
            debug!("Expression {} is invalid: {}", self, e);
        }
        result
    }

    /// Value of `evaluate`, with invalid expressions mapped to `None`
    pub fn value(&self) -> Option<f64> {
        self.evaluate().ok()
    }

    /// # Errors
    ///
    /// Same as [`Expression::evaluate`], for the subtree rooted at `id`.
    pub fn evaluate_node(&self, id: NodeId) -> Result<f64, ExpressionError> {
        match self.kind(id) {
            NodeKind::Digit(d) => Ok(f64::from(*d)),
            NodeKind::Literal(digits) => {
                let digits: Vec<u8> = digits
                    .iter()
                    .filter_map(|&digit| match self.kind(digit) {
                        NodeKind::Digit(d) => Some(*d),
                        _ => None,
                    })
                    .collect();
                representable(digits_to_number(&digits))
            }
            NodeKind::Binary { op, left, right } => {
                let left = self.evaluate_node(*left)?;
                let right = self.evaluate_node(*right)?;
                apply(*op, left, right)
            }
            NodeKind::Factorial(inner) => {
                let operand = self.evaluate_node(*inner)?;
                if matches!(self.kind(*inner), NodeKind::Factorial(_))
                    && operand < MIN_NESTED_FACTORIAL
                {
                    return Err(ExpressionError::RedundantFactorial);
                }
                factorial(operand)
            }
        }
    }
}
