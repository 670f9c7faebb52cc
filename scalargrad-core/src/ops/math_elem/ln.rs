// scalargrad-core/src/ops/math_elem/ln.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};

/// Natural logarithm `ln(a)`.
///
/// The logarithm is only defined for strictly positive values, and its
/// gradient `1/a` diverges at zero; a non-positive operand therefore fails
/// with [`ScalarGradError::DomainError`] at construction time, the same
/// fail-fast treatment the power and division checks get. Loss functions
/// that feed probabilities into `ln` are expected to guard degenerate
/// predictions themselves.
pub fn ln_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, ScalarGradError> {
    let a_value = graph.value(a);
    if a_value <= 0.0 {
        return Err(ScalarGradError::DomainError {
            operation: "ln".to_string(),
            reason: format!("natural logarithm is undefined for {a_value} (requires x > 0)"),
        });
    }
    Ok(graph.push(Node::new(a_value.ln(), Op::Ln(a), "")))
}

/// d(ln a)/da = 1/a.
pub(crate) fn backward(graph: &mut Graph, a: NodeId, upstream: f64) {
    let a_value = graph.value(a);
    graph.accumulate(a, upstream / a_value);
}

// --- Tests ---
#[cfg(test)]
#[path = "ln_test.rs"]
mod tests; // Link to the test file
