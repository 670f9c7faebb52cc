// scalargrad-core/src/ops/arithmetic/neg.rs

use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::arithmetic::mul_op;

/// Negates a node, composed as `a * -1`.
///
/// Inherits the product rule through composition, so there is no dedicated
/// negation record in the op table.
pub fn neg_op(graph: &mut Graph, a: NodeId) -> NodeId {
    mul_op(graph, a, -1.0)
}
