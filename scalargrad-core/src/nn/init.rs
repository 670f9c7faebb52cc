// scalargrad-core/src/nn/init.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Creates `count` leaves drawn uniformly from [-1, 1).
///
/// The default weight initialization for neurons and regression models.
pub fn uniform_init<R: Rng + ?Sized>(
    rng: &mut R,
    graph: &mut Graph,
    count: usize,
) -> Vec<NodeId> {
    (0..count)
        .map(|_| graph.leaf(rng.gen_range(-1.0..1.0)))
        .collect()
}

/// Creates `count` leaves drawn from a zero-mean normal distribution.
pub fn normal_init<R: Rng + ?Sized>(
    rng: &mut R,
    graph: &mut Graph,
    count: usize,
    std_dev: f64,
) -> Result<Vec<NodeId>, ScalarGradError> {
    let normal = Normal::new(0.0, std_dev).map_err(|e| ScalarGradError::InvalidOperation {
        operation: "normal_init".to_string(),
        reason: e.to_string(),
    })?;
    Ok((0..count)
        .map(|_| graph.leaf(normal.sample(rng)))
        .collect())
}
