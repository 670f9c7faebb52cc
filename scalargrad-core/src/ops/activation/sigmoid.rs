// scalargrad-core/src/ops/activation/sigmoid.rs

use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};

/// Logistic sigmoid `t = 1 / (1 + e^-x)`.
pub fn sigmoid_op(graph: &mut Graph, a: NodeId) -> NodeId {
    let x = graph.value(a);
    let t = 1.0 / (1.0 + (-x).exp());
    graph.push(Node::new(t, Op::Sigmoid(a), ""))
}

/// d(sigmoid x)/dx = t * (1 - t), expressed through the forward value.
pub(crate) fn backward(graph: &mut Graph, a: NodeId, out_value: f64, upstream: f64) {
    graph.accumulate(a, out_value * (1.0 - out_value) * upstream);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sigmoid_forward() {
        let mut graph = Graph::new();
        let x = graph.leaf(0.0);
        let t = sigmoid_op(&mut graph, x);
        assert_eq!(graph.value(t), 0.5);

        let big = graph.leaf(40.0);
        let saturated = sigmoid_op(&mut graph, big);
        assert_relative_eq!(graph.value(saturated), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sigmoid_backward() {
        let mut graph = Graph::new();
        let x = graph.leaf(0.0);
        let t = sigmoid_op(&mut graph, x);
        graph.backward(t);
        // t(1-t) at t = 0.5
        assert_relative_eq!(graph.grad(x), 0.25, epsilon = 1e-12);
    }
}
