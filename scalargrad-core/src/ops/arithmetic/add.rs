// scalargrad-core/src/ops/arithmetic/add.rs

use crate::graph::Graph;
use crate::node::{Node, NodeId, Op, Operand};

// --- Forward Operation ---

/// Adds two operands, promoting raw scalars to leaves.
///
/// Returns a new result node with `value = a + b` and an `Add` record; the
/// backward rule forwards the upstream gradient unchanged to both operands.
pub fn add_op(graph: &mut Graph, a: impl Into<Operand>, b: impl Into<Operand>) -> NodeId {
    let a = graph.resolve(a);
    let b = graph.resolve(b);
    let value = graph.value(a) + graph.value(b);
    graph.push(Node::new(value, Op::Add(a, b), ""))
}

// --- Backward Operation ---

/// d(a+b)/da = d(a+b)/db = 1.
pub(crate) fn backward(graph: &mut Graph, a: NodeId, b: NodeId, upstream: f64) {
    graph.accumulate(a, upstream);
    graph.accumulate(b, upstream);
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_forward() {
        let mut graph = Graph::new();
        let a = graph.leaf(0.0);
        let b = graph.leaf(1.0);
        let z = add_op(&mut graph, a, b);

        assert_eq!(graph.value(z), 1.0);
        assert_eq!(graph.node(z).operands(), vec![a, b]);
        assert_eq!(graph.node(z).op(), &Op::Add(a, b));
        assert_eq!(graph.node(z).op().symbol(), "+");
    }

    #[test]
    fn test_add_backward_sends_unit_to_both() {
        let mut graph = Graph::new();
        let a = graph.leaf(0.0);
        let b = graph.leaf(1.0);
        let z = add_op(&mut graph, a, b);

        graph.backward(z);
        assert_eq!(graph.grad(a), 1.0);
        assert_eq!(graph.grad(b), 1.0);
    }

    #[test]
    fn test_add_scalar_rhs_and_lhs() {
        let mut graph = Graph::new();
        let x = graph.leaf(2.0);
        let r = add_op(&mut graph, x, 3.0);
        assert_eq!(graph.value(r), 5.0);

        let l = add_op(&mut graph, -1.5, x);
        assert_eq!(graph.value(l), 0.5);
    }
}
