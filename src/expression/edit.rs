use log::debug;

use crate::expression::ast::{BinaryOp, Expression, NodeId, NodeKind};

impl Expression {
    /// Standalone copy of the subtree rooted at `id`
    pub fn subtree(&self, id: NodeId) -> Expression {
        let mut copy = Expression::empty();
        copy.root = copy.copy_from(self, id, None);
        copy
    }

    /// Copy of this tree with the node at `target` replaced by `replacement`.
    ///
    /// The slot to overwrite is found through the target's parent link; a
    /// target without a parent is the root and the replacement becomes the
    /// whole tree. `self` is left untouched.
    pub fn replace_at(&self, target: NodeId, replacement: &Expression) -> Expression {
        let mut tree = self.clone();
        let parent = tree.parent(target);
        let grafted = tree.copy_from(replacement, replacement.root, parent);

        match parent {
            None => tree.root = grafted,
            Some(parent) => match &mut tree.node_mut(parent).kind {
                NodeKind::Binary { left, right, .. } => {
                    if *left == target {
                        *left = grafted;
                    } else if *right == target {
                        *right = grafted;
                    }
                }
                NodeKind::Factorial(inner) => *inner = grafted,
                NodeKind::Literal(digits) => {
                    if let Some(slot) = digits.iter_mut().find(|slot| **slot == target) {
                        *slot = grafted;
                    }
                }
                NodeKind::Digit(_) => {
                    debug!("Digit node {:?} cannot own a child", parent);
                }
            },
        }

        tree.compact()
    }

    /// Copy of this tree with `digit` appended to the literal at `literal`.
    /// Returns `None` if `literal` is not a literal node or `digit` is above 9.
    pub fn append_digit(&self, literal: NodeId, digit: u8) -> Option<Expression> {
        if !self.is_literal(literal) || digit > 9 {
            return None;
        }

        let mut tree = self.clone();
        let id = tree.push(NodeKind::Digit(digit), Some(literal));
        if let NodeKind::Literal(digits) = &mut tree.node_mut(literal).kind {
            digits.push(id);
        }
        Some(tree)
    }

    /// Replace the node at `target` with `(target op digit)`.
    /// Returns `None` if `digit` is above 9.
    pub fn wrap_binary(&self, target: NodeId, op: BinaryOp, digit: u8) -> Option<Expression> {
        let operand = Expression::literal(&[digit])?;
        let wrapped = Expression::binary(op, &self.subtree(target), &operand);
        Some(self.replace_at(target, &wrapped))
    }

    /// Replace the node at `target` with `target!`
    pub fn wrap_factorial(&self, target: NodeId) -> Expression {
        let wrapped = Expression::factorial(&self.subtree(target));
        self.replace_at(target, &wrapped)
    }

    /// Rebuild the arena with only the nodes reachable from the root
    fn compact(&self) -> Expression {
        self.subtree(self.root)
    }
}
