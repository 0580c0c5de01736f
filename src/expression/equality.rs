use crate::expression::ast::{Expression, NodeId, NodeKind};

fn nodes_eq(a: &Expression, a_id: NodeId, b: &Expression, b_id: NodeId) -> bool {
    match (a.kind(a_id), b.kind(b_id)) {
        (NodeKind::Digit(x), NodeKind::Digit(y)) => x == y,
        (NodeKind::Literal(_), NodeKind::Literal(_)) => {
            a.evaluate_node(a_id).ok() == b.evaluate_node(b_id).ok()
        }
        (
            NodeKind::Binary {
                op: op_a,
                left: la,
                right: ra,
            },
            NodeKind::Binary {
                op: op_b,
                left: lb,
                right: rb,
            },
        ) => {
            if op_a != op_b {
                return false;
            }
            let in_order = nodes_eq(a, *la, b, *lb) && nodes_eq(a, *ra, b, *rb);
            in_order
                || (op_a.is_commutative() && nodes_eq(a, *la, b, *rb) && nodes_eq(a, *ra, b, *lb))
        }
        (NodeKind::Factorial(x), NodeKind::Factorial(y)) => nodes_eq(a, *x, b, *y),
        _ => false,
    }
}

impl Expression {
    /// Structural equality: literals compare by value, `+` and `*` ignore
    /// operand order, every other operator compares operands in order.
    pub fn structurally_eq(&self, other: &Expression) -> bool {
        nodes_eq(self, self.root, other, other.root)
    }

    /// A string that is identical for exactly the structurally equal trees
    pub fn canonical_form(&self) -> String {
        fn key(expr: &Expression, id: NodeId) -> String {
            match expr.kind(id) {
                NodeKind::Digit(d) => format!("#{}", d),
                NodeKind::Literal(_) => match expr.evaluate_node(id) {
                    Ok(value) => format!("{}", value),
                    Err(_) => String::from("inf"),
                },
                NodeKind::Binary { op, left, right } => {
                    let mut l = key(expr, *left);
                    let mut r = key(expr, *right);
                    if op.is_commutative() && r < l {
                        std::mem::swap(&mut l, &mut r);
                    }
                    format!("({}{}{})", l, op.symbol(), r)
                }
                NodeKind::Factorial(inner) => format!("{}!", key(expr, *inner)),
            }
        }

        key(self, self.root)
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.structurally_eq(other)
    }
}
