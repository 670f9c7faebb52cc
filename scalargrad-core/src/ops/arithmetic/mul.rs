// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::graph::Graph;
use crate::node::{Node, NodeId, Op, Operand};

// --- Forward Operation ---

/// Multiplies two operands, promoting raw scalars to leaves.
pub fn mul_op(graph: &mut Graph, a: impl Into<Operand>, b: impl Into<Operand>) -> NodeId {
    let a = graph.resolve(a);
    let b = graph.resolve(b);
    let value = graph.value(a) * graph.value(b);
    graph.push(Node::new(value, Op::Mul(a, b), ""))
}

// --- Backward Operation ---

/// d(ab)/da = b, d(ab)/db = a. When `a == b` (`x * x`) the two additive
/// contributions land on the same accumulator, which is exactly the product
/// rule for a squared operand.
pub(crate) fn backward(graph: &mut Graph, a: NodeId, b: NodeId, upstream: f64) {
    let a_value = graph.value(a);
    let b_value = graph.value(b);
    graph.accumulate(a, b_value * upstream);
    graph.accumulate(b, a_value * upstream);
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_forward_and_backward() {
        let mut graph = Graph::new();
        let x = graph.leaf(4.0);
        let y = graph.leaf(0.5);
        let z = mul_op(&mut graph, x, y);

        assert_eq!(graph.value(z), 2.0);
        graph.backward(z);
        assert_eq!(graph.grad(x), 0.5);
        assert_eq!(graph.grad(y), 4.0);
    }

    #[test]
    fn test_mul_square_doubles_contribution() {
        let mut graph = Graph::new();
        let x = graph.leaf(-2.5);
        let z = mul_op(&mut graph, x, x);

        graph.backward(z);
        assert_eq!(graph.grad(x), 2.0 * -2.5);
    }

    #[test]
    fn test_mul_scalar_promotion() {
        let mut graph = Graph::new();
        let x = graph.leaf(3.0);
        let z = mul_op(&mut graph, 2.0, x);
        assert_eq!(graph.value(z), 6.0);

        graph.backward(z);
        assert_eq!(graph.grad(x), 2.0);
    }
}
