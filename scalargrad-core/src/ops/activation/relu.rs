// scalargrad-core/src/ops/activation/relu.rs

use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};

/// Negative-side slope of the leaky rectifier.
pub const LEAKY_SLOPE: f64 = 0.01;

/// Rectified linear unit `max(x, 0)`.
pub fn relu_op(graph: &mut Graph, a: NodeId) -> NodeId {
    let x = graph.value(a);
    let t = if x > 0.0 { x } else { 0.0 };
    graph.push(Node::new(t, Op::Relu(a), ""))
}

/// Leaky rectifier: `x` for positive inputs, `0.01 x` otherwise.
pub fn leaky_relu_op(graph: &mut Graph, a: NodeId) -> NodeId {
    let x = graph.value(a);
    let t = if x > 0.0 { x } else { LEAKY_SLOPE * x };
    graph.push(Node::new(t, Op::LeakyRelu(a), ""))
}

/// Passes the gradient through only where the input was positive.
pub(crate) fn backward(graph: &mut Graph, a: NodeId, upstream: f64) {
    if graph.value(a) > 0.0 {
        graph.accumulate(a, upstream);
    }
}

pub(crate) fn backward_leaky(graph: &mut Graph, a: NodeId, upstream: f64) {
    let factor = if graph.value(a) > 0.0 { 1.0 } else { LEAKY_SLOPE };
    graph.accumulate(a, factor * upstream);
}
