use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
///
/// Every variant is raised synchronously while the graph is being built;
/// these are model-construction errors, not transient conditions, so there
/// is no retry or recovery inside the core. A backward pass over an
/// already-constructed graph has no error paths at all.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Invalid operation '{operation}': {reason}")]
    InvalidOperation { operation: String, reason: String },

    #[error("Domain error in '{operation}': {reason}")]
    DomainError { operation: String, reason: String },

    #[error("Division by zero error")]
    DivisionByZero,

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Cannot apply a grouped operation to an empty list of nodes")]
    EmptyNodeList,
}
