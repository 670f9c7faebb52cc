use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical:?} != numerical grad {numerical:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Forward construction failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` receives a fresh graph plus one leaf per entry of `inputs` and must
/// return the scalar root to differentiate. The function is re-invoked with
/// each input perturbed by `+epsilon` and `-epsilon` in turn; the resulting
/// slope is compared to the analytic gradient with an absolute tolerance
/// first and a relative one as fallback, so both tiny and large gradients are
/// judged fairly.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    // --- Analytical pass ---
    let mut graph = Graph::new();
    let leaves: Vec<NodeId> = inputs.iter().map(|&v| graph.leaf(v)).collect();
    let root = func(&mut graph, &leaves)?;
    graph.backward(root);

    // Rebuilds the expression on perturbed inputs and evaluates the root.
    let evaluate = |values: &[f64]| -> Result<f64, GradCheckError> {
        let mut graph = Graph::new();
        let leaves: Vec<NodeId> = values.iter().map(|&v| graph.leaf(v)).collect();
        let root = func(&mut graph, &leaves)?;
        Ok(graph.value(root))
    };

    for (i, &leaf) in leaves.iter().enumerate() {
        let analytical = graph.grad(leaf);
        if !analytical.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical,
            });
        }

        let mut plus = inputs.to_vec();
        plus[i] += epsilon;
        let loss_plus = evaluate(&plus)?;

        let mut minus = inputs.to_vec();
        minus[i] -= epsilon;
        let loss_minus = evaluate(&minus)?;

        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical - numerical).abs();
        debug!(
            "check_grad input {}: analytical {:.9}, numerical {:.9}, difference {:.3e}",
            i, analytical, numerical, difference
        );
        if difference > tolerance
            && !relative_eq!(analytical, numerical, max_relative = tolerance)
        {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical,
                numerical,
                difference,
            });
        }
    }

    Ok(())
}
