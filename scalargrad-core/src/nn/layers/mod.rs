// scalargrad-core/src/nn/layers/mod.rs

pub mod mlp;
pub mod neuron;

pub use mlp::{Layer, Mlp};
pub use neuron::Neuron;
