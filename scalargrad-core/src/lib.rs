// Main modules of the crate
pub mod autograd;
pub mod error;
pub mod graph;
pub mod node;
pub mod ops;

pub mod nn;

// Re-export the core types so they are reachable directly via
// `scalargrad_core::Graph` etc.
pub use error::ScalarGradError;
pub use graph::Graph;
pub use node::{Node, NodeId, Op, Operand};
pub use ops::activation::Activation;
