// scalargrad-core/src/node.rs

/// Stable handle to a node stored in a [`Graph`] arena.
///
/// Handles are plain indices: cheap to copy, and their equality/hashing is
/// handle equality, so two nodes with the same `value` are still distinct
/// nodes. All operand bookkeeping and the backward traversal key on handles,
/// never on values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node inside its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Either an existing graph node or a raw scalar.
///
/// Every binary operator entry point accepts `impl Into<Operand>` so callers
/// can mix handles and literals freely (`add_op(&mut g, x, 1.0)`,
/// `sub_op(&mut g, 5.0, b)`, ...). A `Scalar` operand is promoted to a fresh
/// leaf node at the call site, which also covers the reflected forms
/// (`c - a`, `c / a`, ...) without dedicated entry points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Node(NodeId),
    Scalar(f64),
}

impl From<NodeId> for Operand {
    fn from(id: NodeId) -> Self {
        Operand::Node(id)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Scalar(f64::from(value))
    }
}

/// Operation record attached to each node.
///
/// This replaces per-node backward closures: the record stores the operation
/// kind, the operand handles and any immutable constants (e.g. a power's
/// exponent), and a single dispatcher in the autograd module pattern-matches
/// it to apply the correct local-derivative rule. The record doubles as the
/// diagnostic op tag (see [`Op::symbol`]); it never drives control flow in
/// the forward direction.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// Input, parameter or promoted constant. Its backward rule is a no-op.
    Leaf,
    Add(NodeId, NodeId),
    Sub(NodeId, NodeId),
    Mul(NodeId, NodeId),
    /// `base` raised to a constant exponent. The exponent is a plain scalar,
    /// never a node; `pow_op` rejects node exponents at construction.
    Pow { base: NodeId, exponent: f64 },
    Exp(NodeId),
    Ln(NodeId),
    Sigmoid(NodeId),
    Tanh(NodeId),
    Relu(NodeId),
    LeakyRelu(NodeId),
    /// Grouped normalization over `inputs`. The group node is the sole owner
    /// of the N x N Jacobian rule; `outputs` are the handles of the
    /// projection nodes it reads its seed vector from.
    Softmax {
        inputs: Vec<NodeId>,
        outputs: Vec<NodeId>,
    },
    /// One component of a [`Op::Softmax`] group. Passive in the backward
    /// pass: the group pulls this node's accumulated gradient instead.
    SoftmaxOut { group: NodeId, index: usize },
}

impl Op {
    /// Short diagnostic tag for the operation that produced a node.
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Leaf => "",
            Op::Add(..) => "+",
            Op::Sub(..) => "-",
            Op::Mul(..) => "*",
            Op::Pow { .. } => "**",
            Op::Exp(_) => "exp",
            Op::Ln(_) => "ln",
            Op::Sigmoid(_) => "sigmoid",
            Op::Tanh(_) => "tanh",
            Op::Relu(_) => "relu",
            Op::LeakyRelu(_) => "leaky relu",
            Op::Softmax { .. } => "softmax",
            Op::SoftmaxOut { .. } => "softmax_out",
        }
    }
}

/// A single value-with-history entry of the computation graph.
///
/// `value` is fixed at construction (optimizers may overwrite it in place
/// between steps through [`Graph::set_value`]). `grad` starts at `0.0` and is
/// only ever reset, seeded by a backward pass, or added to; it is never
/// overwritten by gradient propagation, because a node feeding several
/// consumers receives one additive contribution per consumer.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) label: String,
}

impl Node {
    pub(crate) fn new(value: f64, op: Op, label: impl Into<String>) -> Self {
        Node {
            value,
            grad: 0.0,
            op,
            label: label.into(),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn op(&self) -> &Op {
        &self.op
    }

    /// Diagnostic name given at construction, empty if none.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.op, Op::Leaf)
    }

    /// Direct dependencies of this node, in forward operand order.
    ///
    /// The same handle may appear twice (e.g. `x * x`); the traversal
    /// deduplicates by handle, while the backward rules deliberately add one
    /// contribution per appearance.
    pub fn operands(&self) -> Vec<NodeId> {
        match &self.op {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Sub(a, b) | Op::Mul(a, b) => vec![*a, *b],
            Op::Pow { base, .. } => vec![*base],
            Op::Exp(a)
            | Op::Ln(a)
            | Op::Sigmoid(a)
            | Op::Tanh(a)
            | Op::Relu(a)
            | Op::LeakyRelu(a) => vec![*a],
            Op::Softmax { inputs, .. } => inputs.clone(),
            Op::SoftmaxOut { group, .. } => vec![*group],
        }
    }
}
