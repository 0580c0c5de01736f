use log::debug;

use crate::expression::{BinaryOp, Expression, NodeKind};
use crate::generator::candidate::Candidate;

/// Only subtrees above this value are wrapped in a factorial
const FACTORIAL_WRAP_THRESHOLD: f64 = 2.0;

/// Produces the children of an expression for a fixed digit.
///
/// For each node in pre-order the generator emits, in this order:
/// the literal extended by one digit (literal nodes only), the node wrapped
/// as `(node op digit)` for each operator, and `node!` when the node's value
/// exceeds 2. Digit nodes inside literals are never rewritten.
#[derive(Debug, Clone)]
pub struct CandidateGenerator {
    digit: u8,
    operators: &'static [BinaryOp],
    factorials: bool,
}

impl CandidateGenerator {
    /// With `extended_operators` unset only `+ - * /` are used and no factorials
    pub(crate) fn new(digit: u8, extended_operators: bool) -> Self {
        debug_assert!(digit <= 9, "generator digit out of range: {}", digit);
        let operators: &'static [BinaryOp] = if extended_operators {
            &BinaryOp::ALL
        } else {
            &BinaryOp::BASIC
        };

        Self {
            digit,
            operators,
            factorials: extended_operators,
        }
    }

    pub fn digit(&self) -> u8 {
        self.digit
    }

    pub(crate) fn seed(&self) -> Candidate {
        Candidate::seed(self.digit)
    }

    /// Every child of `expr`. When `grow` is false the rules that spend an
    /// extra digit are skipped and only factorial wraps are produced.
    pub fn expand(&self, expr: &Expression, grow: bool) -> Vec<Expression> {
        let mut children = Vec::new();

        for id in expr.nodes() {
            if matches!(expr.kind(id), NodeKind::Digit(_)) {
                continue;
            }

            if grow {
                if let Some(extended) = expr.append_digit(id, self.digit) {
                    children.push(extended);
                }
                children.extend(
                    self.operators
                        .iter()
                        .filter_map(|&op| expr.wrap_binary(id, op, self.digit)),
                );
            }

            if self.factorials
                && expr
                    .evaluate_node(id)
                    .is_ok_and(|value| value > FACTORIAL_WRAP_THRESHOLD)
            {
                children.push(expr.wrap_factorial(id));
            }
        }

        children
    }

    /// Children of `expr` that evaluate to a valid value
    pub fn expand_scored(&self, expr: &Expression, grow: bool) -> Vec<Candidate> {
        let children = self.expand(expr, grow);
        let total = children.len();

        let valid: Vec<Candidate> = children
            .into_iter()
            .filter_map(|child| Candidate::new(child).ok())
            .collect();

        debug!(
            "Expanded {} into {} children ({} valid)",
            expr,
            total,
            valid.len()
        );
        valid
    }
}
