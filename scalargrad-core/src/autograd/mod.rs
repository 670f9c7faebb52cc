// scalargrad-core/src/autograd/mod.rs

pub mod grad_check;
pub mod graph;

use crate::graph::Graph;
use crate::node::{NodeId, Op};
use crate::ops;
use log::trace;

impl Graph {
    /// Runs a reverse-mode pass from `root`, populating `grad` on every node
    /// reachable through operand links.
    ///
    /// The pass first builds a post-order (topological) listing of the
    /// reachable subgraph, seeds `root`'s gradient to `1.0`, then walks the
    /// listing in reverse applying each node's local-gradient rule. By the
    /// time a node is processed, every consumer of it has already deposited
    /// its contribution, so the node's own gradient is final. This is what
    /// makes shared subexpressions (diamonds) accumulate correctly.
    ///
    /// Gradients are accumulated, never overwritten: invoking `backward`
    /// again without [`zero_grad`](Graph::zero_grad) adds on top of the
    /// previous pass, which is how independent losses are summed across a
    /// batch before a single optimizer step. Calling `backward` on a leaf is
    /// legal and simply seeds its gradient.
    pub fn backward(&mut self, root: NodeId) {
        let mut visited = vec![false; self.len()];
        let mut sorted_list = Vec::new();
        graph::build_topo(self, root, &mut visited, &mut sorted_list);
        trace!(
            "backward: {} nodes reachable from node {}",
            sorted_list.len(),
            root.index()
        );

        // Seed derivative of the root with respect to itself.
        self.node_mut(root).grad = 1.0;

        for &id in sorted_list.iter().rev() {
            self.apply_local_gradient(id);
        }
    }

    /// Dispatches one node's local-derivative rule.
    ///
    /// The node's accumulated gradient is final at this point; the rule adds
    /// `d(out)/d(operand) * grad` into each operand's accumulator.
    fn apply_local_gradient(&mut self, id: NodeId) {
        let node = self.node(id);
        let upstream = node.grad;
        let out_value = node.value;
        // The op record is cloned so the rules below can mutate operand
        // accumulators; everything but Softmax is a couple of words.
        let op = node.op.clone();

        match op {
            Op::Leaf => {}
            Op::Add(a, b) => ops::arithmetic::add::backward(self, a, b, upstream),
            Op::Sub(a, b) => ops::arithmetic::sub::backward(self, a, b, upstream),
            Op::Mul(a, b) => ops::arithmetic::mul::backward(self, a, b, upstream),
            Op::Pow { base, exponent } => {
                ops::arithmetic::pow::backward(self, base, exponent, upstream)
            }
            Op::Exp(a) => ops::math_elem::exp::backward(self, a, out_value, upstream),
            Op::Ln(a) => ops::math_elem::ln::backward(self, a, upstream),
            Op::Sigmoid(a) => ops::activation::sigmoid::backward(self, a, out_value, upstream),
            Op::Tanh(a) => ops::activation::tanh::backward(self, a, out_value, upstream),
            Op::Relu(a) => ops::activation::relu::backward(self, a, upstream),
            Op::LeakyRelu(a) => ops::activation::relu::backward_leaky(self, a, upstream),
            Op::Softmax { inputs, outputs } => {
                ops::activation::softmax::backward(self, &inputs, &outputs)
            }
            // The group node owns the Jacobian; projections are passive.
            Op::SoftmaxOut { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Graph;

    #[test]
    fn test_sum_rule() {
        let mut graph = Graph::new();
        let x = graph.leaf(4.25);
        let y = graph.leaf(-17.0);
        let z = graph.add(x, y);

        graph.backward(z);
        assert_eq!(graph.grad(x), 1.0);
        assert_eq!(graph.grad(y), 1.0);
        assert_eq!(graph.grad(z), 1.0);
    }

    #[test]
    fn test_product_rule() {
        let mut graph = Graph::new();
        let x = graph.leaf(3.0);
        let y = graph.leaf(-2.0);
        let z = graph.mul(x, y);

        graph.backward(z);
        assert_eq!(graph.grad(x), -2.0);
        assert_eq!(graph.grad(y), 3.0);
    }

    #[test]
    fn test_diamond_accumulation_same_node_twice() {
        // z = x * x must see two additive contributions into the same handle.
        let mut graph = Graph::new();
        let x = graph.leaf(5.0);
        let z = graph.mul(x, x);

        graph.backward(z);
        assert_eq!(graph.grad(x), 10.0);
    }

    #[test]
    fn test_shared_subexpression_accumulates() {
        // y = x + x; z = y * y. dz/dx = 2y * 2 = 8x.
        let mut graph = Graph::new();
        let x = graph.leaf(1.5);
        let y = graph.add(x, x);
        let z = graph.mul(y, y);

        graph.backward(z);
        assert_eq!(graph.grad(y), 2.0 * 3.0);
        assert_eq!(graph.grad(x), 8.0 * 1.5);
    }

    #[test]
    fn test_backward_on_leaf_only_seeds() {
        let mut graph = Graph::new();
        let x = graph.leaf(7.0);
        graph.backward(x);
        assert_eq!(graph.grad(x), 1.0);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_additive_reentry_doubles_leaf_grads() {
        // Leaves feeding the root directly see exact doubling on a second
        // pass: the root's seed is assigned, their contributions add. Deeper
        // graphs compound through intermediate accumulators instead.
        let mut graph = Graph::new();
        let x = graph.leaf(3.0);
        let y = graph.leaf(4.0);
        let z = graph.mul(x, y);

        graph.backward(z);
        assert_eq!(graph.grad(x), 4.0);
        assert_eq!(graph.grad(y), 3.0);

        graph.backward(z);
        assert_eq!(graph.grad(x), 8.0);
        assert_eq!(graph.grad(y), 6.0);
    }
}
