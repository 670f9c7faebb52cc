// scalargrad-optim/src/sgd.rs

use crate::Optimizer;
use log::trace;
use scalargrad_core::{Graph, NodeId};

/// Implements stochastic gradient descent.
///
/// Updates parameters `p` according to the rule:
/// `p = p - lr * grad(p)`
#[derive(Debug)]
pub struct Sgd {
    lr: f64, // Learning rate
}

impl Sgd {
    /// Creates a new SGD optimizer instance.
    ///
    /// # Arguments
    ///
    /// * `lr` - The learning rate.
    pub fn new(lr: f64) -> Self {
        Sgd { lr }
    }
}

impl Optimizer for Sgd {
    /// Performs a single optimization step (parameter update).
    fn step(&mut self, graph: &mut Graph, params: &[NodeId]) {
        for &param in params {
            let update = self.lr * graph.grad(param);
            let value = graph.value(param) - update;
            trace!(
                "sgd step: node {} -> {:.6} (update {:.3e})",
                param.index(),
                value,
                update
            );
            graph.set_value(param, value);
        }
    }
}
