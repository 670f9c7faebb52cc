// scalargrad-optim/src/batch.rs

use crate::Optimizer;
use log::trace;
use scalargrad_core::{Graph, NodeId};

/// Batch gradient descent over accumulated gradients.
///
/// The engine adds gradients across backward passes, so running one backward
/// per sample of a batch leaves `grad(p)` holding the *sum* of per-sample
/// gradients. This optimizer updates with the mean,
/// `p = p - lr * grad(p) / batch_size`, and clears the accumulators as part
/// of the step so the next batch starts from zero.
#[derive(Debug)]
pub struct BatchGradientDescent {
    lr: f64,
    batch_size: usize,
}

impl BatchGradientDescent {
    pub fn new(lr: f64, batch_size: usize) -> Self {
        BatchGradientDescent { lr, batch_size }
    }
}

impl Optimizer for BatchGradientDescent {
    fn step(&mut self, graph: &mut Graph, params: &[NodeId]) {
        let scale = self.lr / self.batch_size as f64;
        for &param in params {
            let update = scale * graph.grad(param);
            let value = graph.value(param) - update;
            trace!(
                "batch gd step: node {} -> {:.6} (update {:.3e})",
                param.index(),
                value,
                update
            );
            graph.set_value(param, value);
            graph.clear_grad(param);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_batch_step_uses_mean_gradient_and_clears() {
        let mut graph = Graph::new();
        let p = graph.leaf(2.0);

        // Two "samples": losses 3p and 5p, backward run per sample.
        let first = graph.mul(p, 3.0);
        graph.backward(first);
        let second = graph.mul(p, 5.0);
        graph.backward(second);
        assert_eq!(graph.grad(p), 8.0);

        let mut optim = BatchGradientDescent::new(0.5, 2);
        optim.step(&mut graph, &[p]);

        // p = 2.0 - 0.5 * 8 / 2 = 0.0, and the accumulator is reset.
        assert_relative_eq!(graph.value(p), 0.0, epsilon = 1e-12);
        assert_eq!(graph.grad(p), 0.0);
    }
}
