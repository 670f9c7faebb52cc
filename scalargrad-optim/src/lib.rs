use scalargrad_core::{Graph, NodeId};

// Define modules for optimizers
pub mod batch;
pub mod sgd;

pub use batch::BatchGradientDescent;
pub use sgd::Sgd;

/// Trait for optimization algorithms.
/// Optimizers update the parameters of a model based on their gradients.
///
/// Optimizers are stateless with respect to the parameter list: the caller
/// passes the parameter handles (and the graph that owns them) on every
/// call, mirroring how models expose `parameters()`.
pub trait Optimizer {
    /// Performs a single optimization step (parameter update).
    ///
    /// # Arguments
    /// * `graph` - The arena holding the parameters and their gradients.
    /// * `params` - Handles of the parameters to update.
    fn step(&mut self, graph: &mut Graph, params: &[NodeId]);

    /// Clears the gradients of the given parameters.
    /// Should be called between steps to avoid accumulating gradients from
    /// multiple iterations (the engine never resets gradients on its own).
    fn zero_grad(&self, graph: &mut Graph, params: &[NodeId]) {
        for &param in params {
            graph.clear_grad(param);
        }
    }
}
