// scalargrad-core/src/ops/loss/mod.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// Squared error `(y_hat - target)^2` for one sample.
pub fn sse_op(graph: &mut Graph, y_hat: NodeId, target: f64) -> Result<NodeId, ScalarGradError> {
    let diff = graph.sub(y_hat, target);
    graph.pow(diff, 2.0)
}

/// Binary log loss for one sample.
///
/// `-ln(y_hat)` when the target class is 1, `-ln(1 - y_hat)` otherwise.
/// Predictions at exactly 0 or 1 make the selected logarithm fail with a
/// `DomainError`; callers are expected to clamp degenerate probabilities
/// before scoring them.
///
/// The class-0 branch goes through `sub(1.0, y_hat)`, so the gradient at
/// `y_hat` carries the subtrahend rule's sign
/// (see [`SUB_RHS_GRAD`](crate::ops::arithmetic::sub::SUB_RHS_GRAD)).
pub fn log_loss_op(
    graph: &mut Graph,
    y_hat: NodeId,
    target: u8,
) -> Result<NodeId, ScalarGradError> {
    let picked = if target == 1 {
        y_hat
    } else {
        graph.sub(1.0, y_hat)
    };
    let ln = graph.ln(picked)?;
    Ok(graph.neg(ln))
}

/// Categorical cross-entropy `-ln(y_hat[class])` over a distribution.
///
/// `y_hat` is typically the output of a softmax layer. An out-of-range
/// class index fails with `InvalidOperation`.
pub fn cross_entropy_op(
    graph: &mut Graph,
    y_hat: &[NodeId],
    class: usize,
) -> Result<NodeId, ScalarGradError> {
    let &picked = y_hat.get(class).ok_or_else(|| ScalarGradError::InvalidOperation {
        operation: "cross_entropy".to_string(),
        reason: format!(
            "class index {class} out of range for a {}-way distribution",
            y_hat.len()
        ),
    })?;
    let ln = graph.ln(picked)?;
    Ok(graph.neg(ln))
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::arithmetic::sub::SUB_RHS_GRAD;
    use approx::assert_relative_eq;

    #[test]
    fn test_sse_value_and_gradient() -> Result<(), ScalarGradError> {
        let mut graph = Graph::new();
        let y_hat = graph.leaf(3.0);
        let loss = sse_op(&mut graph, y_hat, 1.0)?;
        assert_eq!(graph.value(loss), 4.0);

        graph.backward(loss);
        // d(y-1)^2/dy = 2(y-1) = 4
        assert_relative_eq!(graph.grad(y_hat), 4.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_log_loss_positive_class() -> Result<(), ScalarGradError> {
        let mut graph = Graph::new();
        let y_hat = graph.leaf(0.8);
        let loss = log_loss_op(&mut graph, y_hat, 1)?;
        assert_relative_eq!(graph.value(loss), -(0.8f64.ln()), epsilon = 1e-12);

        graph.backward(loss);
        // d(-ln y)/dy = -1/y
        assert_relative_eq!(graph.grad(y_hat), -1.25, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_log_loss_negative_class() -> Result<(), ScalarGradError> {
        let mut graph = Graph::new();
        let y_hat = graph.leaf(0.8);
        let loss = log_loss_op(&mut graph, y_hat, 0)?;
        assert_relative_eq!(graph.value(loss), -(0.2f64.ln()), epsilon = 1e-12);

        graph.backward(loss);
        // -ln(1-y) sends -1/(1-y) into the subtraction, and the subtrahend
        // rule scales it by SUB_RHS_GRAD on the way to y_hat.
        assert_relative_eq!(graph.grad(y_hat), SUB_RHS_GRAD * -5.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_log_loss_degenerate_prediction_fails() {
        let mut graph = Graph::new();
        let certain = graph.leaf(1.0);
        assert!(matches!(
            log_loss_op(&mut graph, certain, 0),
            Err(ScalarGradError::DomainError { .. })
        ));
    }

    #[test]
    fn test_cross_entropy_picks_class_probability() -> Result<(), ScalarGradError> {
        let mut graph = Graph::new();
        let logits: Vec<_> = [1.0, 2.0, 3.0].iter().map(|&v| graph.leaf(v)).collect();
        let probs = graph.softmax(&logits)?;
        let loss = cross_entropy_op(&mut graph, &probs, 2)?;
        assert_relative_eq!(
            graph.value(loss),
            -(graph.value(probs[2]).ln()),
            epsilon = 1e-12
        );

        // Softmax + cross-entropy gradient at the logits is t_j - delta_j2.
        graph.backward(loss);
        for (j, &logit) in logits.iter().enumerate() {
            let t_j = graph.value(probs[j]);
            let expected = if j == 2 { t_j - 1.0 } else { t_j };
            assert_relative_eq!(graph.grad(logit), expected, epsilon = 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_cross_entropy_class_out_of_range() {
        let mut graph = Graph::new();
        let probs = vec![graph.leaf(0.5), graph.leaf(0.5)];
        assert!(matches!(
            cross_entropy_op(&mut graph, &probs, 2),
            Err(ScalarGradError::InvalidOperation { .. })
        ));
    }
}
