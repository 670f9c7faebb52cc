// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Op, Operand};

// --- Forward Operation ---

/// Raises `base` to a constant exponent.
///
/// The exponent must be a plain scalar: passing a node handle fails with
/// [`ScalarGradError::InvalidOperation`], since differentiating through the
/// exponent is not part of the power rule this engine implements. A zero
/// base is only accepted with a strictly positive exponent; both `0**0`
/// and `0**negative` fail with [`ScalarGradError::DomainError`] before any
/// node is constructed.
pub fn pow_op(
    graph: &mut Graph,
    base: NodeId,
    exponent: impl Into<Operand>,
) -> Result<NodeId, ScalarGradError> {
    let exponent = match exponent.into() {
        Operand::Scalar(e) => e,
        Operand::Node(_) => {
            return Err(ScalarGradError::InvalidOperation {
                operation: "pow".to_string(),
                reason: "exponent must be a plain numeric constant, not a graph node".to_string(),
            })
        }
    };

    let base_value = graph.value(base);
    if base_value == 0.0 && exponent <= 0.0 {
        return Err(ScalarGradError::DomainError {
            operation: "pow".to_string(),
            reason: format!("0.0 can only be raised to a positive power, got exponent {exponent}"),
        });
    }

    let value = base_value.powf(exponent);
    Ok(graph.push(Node::new(value, Op::Pow { base, exponent }, "")))
}

// --- Backward Operation ---

/// d(a^n)/da = n * a^(n-1).
pub(crate) fn backward(graph: &mut Graph, base: NodeId, exponent: f64, upstream: f64) {
    let base_value = graph.value(base);
    graph.accumulate(base, exponent * base_value.powf(exponent - 1.0) * upstream);
}

// --- Tests ---
