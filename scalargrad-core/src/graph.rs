// scalargrad-core/src/graph.rs

use crate::error::ScalarGradError;
use crate::node::{Node, NodeId, Op, Operand};
use crate::ops;

/// Arena holding every node of one computation graph.
///
/// The graph is the sole entry point for building expressions, running the
/// backward pass and reading gradients. Nodes are addressed by [`NodeId`]
/// handles; a handle stays valid until the arena is truncated past it.
///
/// Construction and traversal are single-threaded and fully synchronous:
/// operand lists are read-only after a node is pushed, and only the `grad`
/// accumulators are mutated afterwards.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    pub fn new() -> Self {
        Graph { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes currently in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates an input/parameter node holding `value`.
    pub fn leaf(&mut self, value: f64) -> NodeId {
        self.push(Node::new(value, Op::Leaf, ""))
    }

    /// Creates a labelled leaf. The label has no semantic effect; it only
    /// shows up in diagnostics.
    pub fn leaf_labeled(&mut self, value: f64, label: &str) -> NodeId {
        self.push(Node::new(value, Op::Leaf, label))
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Resolves an operand to a node handle, promoting raw scalars to fresh
    /// leaves.
    pub fn resolve(&mut self, operand: impl Into<Operand>) -> NodeId {
        match operand.into() {
            Operand::Node(id) => id,
            Operand::Scalar(value) => self.leaf(value),
        }
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn value(&self, id: NodeId) -> f64 {
        self.nodes[id.0].value
    }

    pub fn grad(&self, id: NodeId) -> f64 {
        self.nodes[id.0].grad
    }

    /// Overwrites a node's value in place.
    ///
    /// Intended for optimizer updates on parameter leaves between training
    /// steps; result nodes built from the old value are not recomputed.
    pub fn set_value(&mut self, id: NodeId, value: f64) {
        self.nodes[id.0].value = value;
    }

    /// Resets one node's gradient accumulator to `0.0`.
    pub fn clear_grad(&mut self, id: NodeId) {
        self.nodes[id.0].grad = 0.0;
    }

    /// Resets every gradient accumulator in the arena to `0.0`.
    ///
    /// The engine never resets gradients on its own: repeated backward
    /// passes accumulate by design, and it is the caller's job to zero
    /// between optimizer steps.
    pub fn zero_grad(&mut self) {
        for node in &mut self.nodes {
            node.grad = 0.0;
        }
    }

    pub(crate) fn accumulate(&mut self, id: NodeId, contribution: f64) {
        self.nodes[id.0].grad += contribution;
    }

    /// Returns a marker for the current arena size.
    ///
    /// Typical training usage: create the parameter leaves, take a mark, and
    /// [`truncate`](Graph::truncate) back to it after each step to discard
    /// the step's expression nodes while keeping the parameters (and their
    /// handles) alive.
    pub fn mark(&self) -> usize {
        self.nodes.len()
    }

    /// Drops every node created after `mark` was taken.
    ///
    /// Handles above the mark become invalid; handles below it are
    /// untouched.
    pub fn truncate(&mut self, mark: usize) {
        self.nodes.truncate(mark);
    }

    // --- Operator surface ---
    //
    // Thin wrappers over the op constructors in `crate::ops`, so expression
    // building reads as `g.add(x, y)` instead of `add_op(&mut g, x, y)`.

    pub fn add(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> NodeId {
        ops::arithmetic::add::add_op(self, a, b)
    }

    pub fn sub(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> NodeId {
        ops::arithmetic::sub::sub_op(self, a, b)
    }

    pub fn mul(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> NodeId {
        ops::arithmetic::mul::mul_op(self, a, b)
    }

    pub fn neg(&mut self, a: NodeId) -> NodeId {
        ops::arithmetic::neg::neg_op(self, a)
    }

    pub fn pow(
        &mut self,
        base: NodeId,
        exponent: impl Into<Operand>,
    ) -> Result<NodeId, ScalarGradError> {
        ops::arithmetic::pow::pow_op(self, base, exponent)
    }

    pub fn div(
        &mut self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, ScalarGradError> {
        ops::arithmetic::div::div_op(self, a, b)
    }

    pub fn exp(&mut self, a: NodeId) -> NodeId {
        ops::math_elem::exp::exp_op(self, a)
    }

    pub fn ln(&mut self, a: NodeId) -> Result<NodeId, ScalarGradError> {
        ops::math_elem::ln::ln_op(self, a)
    }

    pub fn sigmoid(&mut self, a: NodeId) -> NodeId {
        ops::activation::sigmoid::sigmoid_op(self, a)
    }

    pub fn tanh(&mut self, a: NodeId) -> NodeId {
        ops::activation::tanh::tanh_op(self, a)
    }

    pub fn relu(&mut self, a: NodeId) -> NodeId {
        ops::activation::relu::relu_op(self, a)
    }

    pub fn leaky_relu(&mut self, a: NodeId) -> NodeId {
        ops::activation::relu::leaky_relu_op(self, a)
    }

    pub fn softmax(&mut self, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarGradError> {
        ops::activation::softmax::softmax_op(self, inputs)
    }
}
