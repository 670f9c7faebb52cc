use crate::graph::Graph;
use crate::node::NodeId;

/// Recursively builds a topological sort of the computation graph.
/// Used by `backward()` to process nodes in the correct order.
///
/// Post-order DFS over operand links: a node is appended only after all of
/// its operands, so the resulting listing is a valid topological order of the
/// dependency graph. The visited set is keyed by node handle, which
/// guarantees each node is appended exactly once even when it is reachable
/// through several paths (diamond dependencies) or appears twice in one
/// operand list (`x * x`).
///
/// Made `pub(crate)` as it's an internal detail of the autograd system.
pub(crate) fn build_topo(
    graph: &Graph,
    node: NodeId,
    visited: &mut [bool],
    sorted_list: &mut Vec<NodeId>,
) {
    if visited[node.index()] {
        return;
    }
    visited[node.index()] = true;

    for operand in graph.node(node).operands() {
        build_topo(graph, operand, visited, sorted_list);
    }
    sorted_list.push(node);
}
