// scalargrad-core/src/ops/arithmetic/div.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Operand};
use crate::ops::arithmetic::{mul_op, pow_op};

/// Divides `a` by `b`, composed as `a * b^-1`.
///
/// There is no dedicated division record: the reciprocal is a power node and
/// the quotient a product node, so the backward rules of both compose into
/// the quotient rule. A zero divisor fails with
/// [`ScalarGradError::DivisionByZero`] before the reciprocal is constructed.
pub fn div_op(
    graph: &mut Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, ScalarGradError> {
    let a = graph.resolve(a);
    let b = graph.resolve(b);
    if graph.value(b) == 0.0 {
        return Err(ScalarGradError::DivisionByZero);
    }
    let reciprocal = pow_op(graph, b, -1.0)?;
    Ok(mul_op(graph, a, reciprocal))
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_div_forward() {
        let mut graph = Graph::new();
        let b = graph.leaf(1.0);
        let c = graph.leaf(-2.0);
        let z = div_op(&mut graph, b, c).unwrap();
        assert_eq!(graph.value(z), -0.5);
    }

    #[test]
    fn test_div_backward_composes_quotient_rule() {
        // z = a/b: dz/da = 1/b, dz/db = -a/b^2.
        let mut graph = Graph::new();
        let a = graph.leaf(2.0);
        let b = graph.leaf(4.0);
        let z = div_op(&mut graph, a, b).unwrap();

        graph.backward(z);
        assert_relative_eq!(graph.grad(a), 0.25, epsilon = 1e-12);
        assert_relative_eq!(graph.grad(b), -0.125, epsilon = 1e-12);
    }

    #[test]
    fn test_div_by_zero_fails_fast() {
        let mut graph = Graph::new();
        let a = graph.leaf(2.0);
        let zero = graph.leaf(0.0);
        assert_eq!(
            div_op(&mut graph, a, zero),
            Err(ScalarGradError::DivisionByZero)
        );
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_reflected_div_scalar_lhs() {
        // 3 / x = 3 * x^-1.
        let mut graph = Graph::new();
        let x = graph.leaf(2.0);
        let z = div_op(&mut graph, 3.0, x).unwrap();
        assert_eq!(graph.value(z), 1.5);

        graph.backward(z);
        // d(3/x)/dx = -3/x^2 = -0.75
        assert_relative_eq!(graph.grad(x), -0.75, epsilon = 1e-12);
    }
}
