// scalargrad-core/src/nn/module.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// The base trait for neural network building blocks (neurons, layers,
/// containers).
///
/// A module's parameters are leaf nodes it created in some graph; `forward`
/// wires fresh expression nodes from the given inputs to its outputs in that
/// same graph. Modules are deliberately graph-agnostic between calls: the
/// caller owns the arena and typically truncates the per-step expression
/// nodes away after reading gradients (see [`Graph::mark`]).
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `graph`: The arena the module's parameters live in.
    /// * `inputs`: One node per input feature.
    ///
    /// # Returns
    /// The output nodes of the module, or a `ScalarGradError` if the input
    /// arity does not match or an operation fails.
    fn forward(
        &self,
        graph: &mut Graph,
        inputs: &[NodeId],
    ) -> Result<Vec<NodeId>, ScalarGradError>;

    /// Returns the handles of all learnable parameters of the module,
    /// including those of sub-modules.
    fn parameters(&self) -> Vec<NodeId>;
}
