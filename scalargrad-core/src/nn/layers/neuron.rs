// scalargrad-core/src/nn/layers/neuron.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::init::uniform_init;
use crate::nn::module::Module;
use crate::node::NodeId;
use rand::Rng;

/// A single affine unit: `sum(w_i * x_i) + b`.
///
/// Activation is applied at the layer level (see
/// [`Layer`](crate::nn::layers::Layer)), so that layer-coupled activations
/// like softmax see all neuron outputs at once.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: NodeId,
}

impl Neuron {
    /// Creates a neuron with `input_dim` weights and a bias, all drawn
    /// uniformly from [-1, 1).
    pub fn new<R: Rng + ?Sized>(rng: &mut R, graph: &mut Graph, input_dim: usize) -> Self {
        let weights = uniform_init(rng, graph, input_dim);
        let bias = graph.leaf(rng.gen_range(-1.0..1.0));
        Neuron { weights, bias }
    }

    /// Affine forward pass for one input vector.
    pub fn forward_one(
        &self,
        graph: &mut Graph,
        inputs: &[NodeId],
    ) -> Result<NodeId, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let mut acc = self.bias;
        for (&w, &x) in self.weights.iter().zip(inputs.iter()) {
            let wx = graph.mul(w, x);
            acc = graph.add(acc, wx);
        }
        Ok(acc)
    }

    pub fn input_dim(&self) -> usize {
        self.weights.len()
    }
}

impl Module for Neuron {
    fn forward(
        &self,
        graph: &mut Graph,
        inputs: &[NodeId],
    ) -> Result<Vec<NodeId>, ScalarGradError> {
        Ok(vec![self.forward_one(graph, inputs)?])
    }

    fn parameters(&self) -> Vec<NodeId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_neuron_affine_forward() -> Result<(), ScalarGradError> {
        let mut rng = StdRng::seed_from_u64(42);
        let mut graph = Graph::new();
        let neuron = Neuron::new(&mut rng, &mut graph, 2);

        let params = neuron.parameters();
        assert_eq!(params.len(), 3);
        let (w0, w1, b) = (
            graph.value(params[0]),
            graph.value(params[1]),
            graph.value(params[2]),
        );

        let x0 = graph.leaf(2.0);
        let x1 = graph.leaf(-1.0);
        let out = neuron.forward_one(&mut graph, &[x0, x1])?;
        assert_relative_eq!(
            graph.value(out),
            w0 * 2.0 + w1 * -1.0 + b,
            epsilon = 1e-12
        );
        Ok(())
    }

    #[test]
    fn test_neuron_arity_mismatch() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut graph = Graph::new();
        let neuron = Neuron::new(&mut rng, &mut graph, 3);

        let x = graph.leaf(1.0);
        assert_eq!(
            neuron.forward_one(&mut graph, &[x]),
            Err(ScalarGradError::DimensionMismatch {
                expected: 3,
                actual: 1
            })
        );
    }

    #[test]
    fn test_neuron_weight_gradients() -> Result<(), ScalarGradError> {
        let mut rng = StdRng::seed_from_u64(1);
        let mut graph = Graph::new();
        let neuron = Neuron::new(&mut rng, &mut graph, 2);

        let x0 = graph.leaf(3.0);
        let x1 = graph.leaf(-4.0);
        let out = neuron.forward_one(&mut graph, &[x0, x1])?;
        graph.backward(out);

        let params = neuron.parameters();
        // d(w.x + b)/dw_i = x_i, d/db = 1.
        assert_relative_eq!(graph.grad(params[0]), 3.0, epsilon = 1e-12);
        assert_relative_eq!(graph.grad(params[1]), -4.0, epsilon = 1e-12);
        assert_relative_eq!(graph.grad(params[2]), 1.0, epsilon = 1e-12);
        Ok(())
    }
}
