/// Index of a node inside an [`Expression`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Binary operators an expression may combine subtrees with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    /// Every operator, in the order the generator tries them
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Mul,
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Div,
        BinaryOp::Pow,
    ];

    /// The four basic arithmetic operators
    pub const BASIC: [BinaryOp; 4] = [BinaryOp::Mul, BinaryOp::Add, BinaryOp::Sub, BinaryOp::Div];

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Pow => '^',
        }
    }

    pub fn is_commutative(self) -> bool {
        matches!(self, BinaryOp::Add | BinaryOp::Mul)
    }
}

/// Shape of a single node; children are referenced by id
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A single digit, only ever found inside a `Literal`
    Digit(u8),
    /// Concatenated digits forming one base-10 integer, never empty
    Literal(Vec<NodeId>),
    Binary {
        op: BinaryOp,
        left: NodeId,
        right: NodeId,
    },
    Factorial(NodeId),
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
}

/// An expression tree stored as an arena of parent-linked nodes.
///
/// Every node except the root has exactly one parent. Ids are only
/// meaningful for the arena that handed them out; copying a tree into
/// another arena remaps them.
#[derive(Debug, Clone)]
pub struct Expression {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root: NodeId,
}

impl Expression {
    /// A literal made of the given digits, e.g. `[3, 3]` is `33`.
    /// Returns `None` for an empty slice or a digit above 9.
    pub fn literal(digits: &[u8]) -> Option<Self> {
        if digits.is_empty() || digits.iter().any(|&d| d > 9) {
            return None;
        }

        let mut expr = Self::empty();
        let literal = expr.push(NodeKind::Literal(Vec::new()), None);
        let ids = digits
            .iter()
            .map(|&d| expr.push(NodeKind::Digit(d), Some(literal)))
            .collect();
        expr.node_mut(literal).kind = NodeKind::Literal(ids);
        expr.root = literal;
        Some(expr)
    }

    /// The search seed: a one-digit literal. `digit` has already been
    /// validated by the caller.
    pub(crate) fn seed(digit: u8) -> Self {
        debug_assert!(digit <= 9, "seed digit out of range: {}", digit);
        let mut expr = Self::empty();
        let literal = expr.push(NodeKind::Literal(Vec::new()), None);
        let id = expr.push(NodeKind::Digit(digit), Some(literal));
        expr.node_mut(literal).kind = NodeKind::Literal(vec![id]);
        expr.root = literal;
        expr
    }

    pub fn binary(op: BinaryOp, left: &Expression, right: &Expression) -> Self {
        let mut expr = Self::empty();
        let id = expr.push(NodeKind::Digit(0), None);
        let l = expr.copy_from(left, left.root, Some(id));
        let r = expr.copy_from(right, right.root, Some(id));
        expr.node_mut(id).kind = NodeKind::Binary {
            op,
            left: l,
            right: r,
        };
        expr.root = id;
        expr
    }

    pub fn factorial(operand: &Expression) -> Self {
        let mut expr = Self::empty();
        let id = expr.push(NodeKind::Digit(0), None);
        let inner = expr.copy_from(operand, operand.root, Some(id));
        expr.node_mut(id).kind = NodeKind::Factorial(inner);
        expr.root = id;
        expr
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Number of nodes in the tree, digits included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_literal(&self, id: NodeId) -> bool {
        matches!(self.kind(id), NodeKind::Literal(_))
    }

    /// Direct children of a node, left to right
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        match self.kind(id) {
            NodeKind::Digit(_) => Vec::new(),
            NodeKind::Literal(digits) => digits.clone(),
            NodeKind::Binary { left, right, .. } => vec![*left, *right],
            NodeKind::Factorial(inner) => vec![*inner],
        }
    }

    /// All node ids reachable from the root, in pre-order
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];

        while let Some(id) = stack.pop() {
            order.push(id);
            let children = self.children(id);
            stack.extend(children.into_iter().rev());
        }

        order
    }

    /// Number of digit symbols the expression uses
    pub fn digit_count(&self) -> usize {
        self.nodes()
            .into_iter()
            .filter(|&id| matches!(self.kind(id), NodeKind::Digit(_)))
            .count()
    }

    pub(crate) fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            root: NodeId(0),
        }
    }

    // Ids handed out by this arena always index into it.
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub(crate) fn push(&mut self, kind: NodeKind, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { kind, parent });
        id
    }

    /// Copy the subtree of `src` rooted at `id` into this arena, attaching
    /// its root to `parent`. Returns the id of the copied root.
    pub(crate) fn copy_from(
        &mut self,
        src: &Expression,
        id: NodeId,
        parent: Option<NodeId>,
    ) -> NodeId {
        let new_id = self.push(NodeKind::Digit(0), parent);

        let kind = match src.kind(id) {
            NodeKind::Digit(d) => NodeKind::Digit(*d),
            NodeKind::Literal(digits) => NodeKind::Literal(
                digits
                    .iter()
                    .map(|&digit| self.copy_from(src, digit, Some(new_id)))
                    .collect(),
            ),
            NodeKind::Binary { op, left, right } => {
                let (op, left, right) = (*op, *left, *right);
                let left = self.copy_from(src, left, Some(new_id));
                let right = self.copy_from(src, right, Some(new_id));
                NodeKind::Binary { op, left, right }
            }
            NodeKind::Factorial(inner) => {
                let inner = *inner;
                NodeKind::Factorial(self.copy_from(src, inner, Some(new_id)))
            }
        };

        self.node_mut(new_id).kind = kind;
        new_id
    }
}
