// scalargrad-core/src/ops/math_elem/exp.rs

use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};

/// Natural exponential `e^a`.
pub fn exp_op(graph: &mut Graph, a: NodeId) -> NodeId {
    let value = graph.value(a).exp();
    graph.push(Node::new(value, Op::Exp(a), ""))
}

/// d(e^a)/da = e^a, i.e. the result's own forward value.
pub(crate) fn backward(graph: &mut Graph, a: NodeId, out_value: f64, upstream: f64) {
    graph.accumulate(a, out_value * upstream);
}
