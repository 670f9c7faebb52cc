// scalargrad-core/src/nn/mod.rs

pub mod init;
pub mod layers;
pub mod module;

pub use layers::{Layer, Mlp, Neuron};
pub use module::Module;
