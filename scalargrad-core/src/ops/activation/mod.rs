// scalargrad-core/src/ops/activation/mod.rs

pub mod relu;
pub mod sigmoid;
pub mod softmax;
pub mod tanh;

pub use relu::{leaky_relu_op, relu_op};
pub use sigmoid::sigmoid_op;
pub use softmax::softmax_op;
pub use tanh::tanh_op;

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// Closed set of activation functions, dispatched by pattern match.
///
/// This replaces name-based lookup of activation functions: layers store one
/// of these variants and apply it through [`Activation::apply`] /
/// [`Activation::apply_layer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Sigmoid,
    Tanh,
    Relu,
    LeakyRelu,
    Softmax,
    Linear,
}

impl Activation {
    /// Applies the activation to a single node.
    ///
    /// `Linear` is the identity and returns its input unchanged. `Softmax`
    /// couples a whole layer and cannot be applied to one node; it fails
    /// with [`ScalarGradError::InvalidOperation`], use
    /// [`Activation::apply_layer`] instead.
    pub fn apply(&self, graph: &mut Graph, input: NodeId) -> Result<NodeId, ScalarGradError> {
        match self {
            Activation::Sigmoid => Ok(sigmoid_op(graph, input)),
            Activation::Tanh => Ok(tanh_op(graph, input)),
            Activation::Relu => Ok(relu_op(graph, input)),
            Activation::LeakyRelu => Ok(leaky_relu_op(graph, input)),
            Activation::Linear => Ok(input),
            Activation::Softmax => Err(ScalarGradError::InvalidOperation {
                operation: "activation".to_string(),
                reason: "softmax couples a whole layer; use apply_layer".to_string(),
            }),
        }
    }

    /// Applies the activation across a layer of nodes.
    ///
    /// Element-wise variants map [`Activation::apply`] over the slice;
    /// `Softmax` builds one grouped normalization over all of them.
    pub fn apply_layer(
        &self,
        graph: &mut Graph,
        inputs: &[NodeId],
    ) -> Result<Vec<NodeId>, ScalarGradError> {
        match self {
            Activation::Softmax => softmax_op(graph, inputs),
            _ => inputs
                .iter()
                .map(|&input| self.apply(graph, input))
                .collect(),
        }
    }
}
