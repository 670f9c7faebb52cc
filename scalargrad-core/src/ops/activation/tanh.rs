// scalargrad-core/src/ops/activation/tanh.rs

use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};

/// Hyperbolic tangent `t = (e^2x - 1) / (e^2x + 1)`.
///
/// Uses `f64::tanh`, which is the same function without the overflow of the
/// explicit exponential form for large inputs.
pub fn tanh_op(graph: &mut Graph, a: NodeId) -> NodeId {
    let t = graph.value(a).tanh();
    graph.push(Node::new(t, Op::Tanh(a), ""))
}

/// d(tanh x)/dx = 1 - t^2.
pub(crate) fn backward(graph: &mut Graph, a: NodeId, out_value: f64, upstream: f64) {
    graph.accumulate(a, (1.0 - out_value * out_value) * upstream);
}
