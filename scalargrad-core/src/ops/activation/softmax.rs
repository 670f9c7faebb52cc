// scalargrad-core/src/ops/activation/softmax.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};

/// Normalized exponential over a layer of N nodes.
///
/// Returns the N output nodes in input order; their values are positive and
/// sum to one. Internally a single *group* node carries the whole operation:
/// it holds the input handles plus the handles of the N projection nodes
/// returned to the caller, and it is the only node with a backward rule.
///
/// That structure is what makes the N x N Jacobian fire exactly once per
/// backward pass. Every projection lists the group as its operand, so the
/// topological order places the group after all projections; when the group
/// is processed, each projection's accumulated gradient is final and serves
/// as one component of the seed vector for the Jacobian-vector product. The
/// projections themselves propagate nothing; if they each re-applied the
/// shared rule, a root depending on k outputs would distribute the Jacobian
/// k times over.
///
/// The forward pass subtracts the maximum input before exponentiating; the
/// normalized outputs are unchanged by the shift and large inputs no longer
/// overflow.
pub fn softmax_op(graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarGradError> {
    if inputs.is_empty() {
        return Err(ScalarGradError::EmptyNodeList);
    }

    let max = inputs
        .iter()
        .map(|&id| graph.value(id))
        .fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = inputs.iter().map(|&id| (graph.value(id) - max).exp()).collect();
    let denom: f64 = exps.iter().sum();

    // The group node's value is the (shifted) normalization denominator;
    // it is diagnostic only, consumers read the projections.
    let group = graph.push(Node::new(
        denom,
        Op::Softmax {
            inputs: inputs.to_vec(),
            outputs: Vec::new(),
        },
        "softmax",
    ));

    let outputs: Vec<NodeId> = exps
        .iter()
        .enumerate()
        .map(|(index, &e)| graph.push(Node::new(e / denom, Op::SoftmaxOut { group, index }, "")))
        .collect();

    // Patch the projection handles into the group record now that they exist.
    if let Op::Softmax { outputs: slots, .. } = &mut graph.node_mut(group).op {
        *slots = outputs.clone();
    }

    Ok(outputs)
}

/// Applies the full Jacobian-vector product for one softmax group.
///
/// `d out_i / d in_j = t_i * (delta_ij - t_j)`; the seed vector is the
/// accumulated gradient of each projection node. Fires once per backward
/// pass because the group is a single graph node.
pub(crate) fn backward(graph: &mut Graph, inputs: &[NodeId], outputs: &[NodeId]) {
    let t: Vec<f64> = outputs.iter().map(|&o| graph.value(o)).collect();
    let seed: Vec<f64> = outputs.iter().map(|&o| graph.grad(o)).collect();

    for i in 0..outputs.len() {
        for j in 0..inputs.len() {
            let jacobian = if i == j {
                t[i] * (1.0 - t[i])
            } else {
                -t[i] * t[j]
            };
            graph.accumulate(inputs[j], jacobian * seed[i]);
        }
    }
}

// --- Tests ---
