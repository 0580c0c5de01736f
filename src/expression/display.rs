use std::fmt;

use crate::expression::ast::{Expression, NodeId, NodeKind};

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn fmt_node(f: &mut fmt::Formatter, expr: &Expression, id: NodeId) -> fmt::Result {
            match expr.kind(id) {
                NodeKind::Digit(d) => write!(f, "{}", d),
                NodeKind::Literal(digits) => {
                    for &digit in digits {
                        fmt_node(f, expr, digit)?;
                    }
                    Ok(())
                }
                NodeKind::Binary { op, left, right } => {
                    write!(f, "(")?;
                    fmt_node(f, expr, *left)?;
                    write!(f, "{}", op.symbol())?;
                    fmt_node(f, expr, *right)?;
                    write!(f, ")")
                }
                NodeKind::Factorial(inner) => {
                    fmt_node(f, expr, *inner)?;
                    write!(f, "!")
                }
            }
        }

        fmt_node(f, self, self.root)
    }
}
