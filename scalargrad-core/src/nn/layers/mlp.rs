// scalargrad-core/src/nn/layers/mlp.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::node::NodeId;
use crate::ops::activation::Activation;
use rand::Rng;

/// A fully connected layer of neurons sharing one activation.
///
/// The activation is applied across the whole layer output at once, which is
/// what lets `Activation::Softmax` group the neuron outputs into a single
/// normalized distribution.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
    activation: Activation,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        graph: &mut Graph,
        input_dim: usize,
        layer_dim: usize,
        activation: Activation,
    ) -> Self {
        let neurons = (0..layer_dim)
            .map(|_| Neuron::new(rng, graph, input_dim))
            .collect();
        Layer {
            neurons,
            activation,
        }
    }

    pub fn output_dim(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(
        &self,
        graph: &mut Graph,
        inputs: &[NodeId],
    ) -> Result<Vec<NodeId>, ScalarGradError> {
        let mut pre_activation = Vec::with_capacity(self.neurons.len());
        for neuron in &self.neurons {
            pre_activation.push(neuron.forward_one(graph, inputs)?);
        }
        self.activation.apply_layer(graph, &pre_activation)
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }
}

/// Multi-layer perceptron: a chain of [`Layer`]s.
///
/// Hidden layers use the given activation; a `Softmax` activation is only
/// applied to the last layer (hidden layers fall back to `Linear` in that
/// case, since normalizing a hidden layer would collapse its scale).
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        graph: &mut Graph,
        input_dim: usize,
        layer_dims: &[usize],
        activation: Activation,
    ) -> Self {
        let mut sizes = vec![input_dim];
        sizes.extend_from_slice(layer_dims);

        let last = layer_dims.len().saturating_sub(1);
        let layers = (0..layer_dims.len())
            .map(|i| {
                let layer_activation = if activation == Activation::Softmax && i != last {
                    Activation::Linear
                } else {
                    activation
                };
                Layer::new(rng, graph, sizes[i], sizes[i + 1], layer_activation)
            })
            .collect();
        Mlp { layers }
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}

impl Module for Mlp {
    fn forward(
        &self,
        graph: &mut Graph,
        inputs: &[NodeId],
    ) -> Result<Vec<NodeId>, ScalarGradError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(graph, &current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }
}
