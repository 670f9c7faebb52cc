// Builds a small expression by hand and prints the gradient of every
// participating node after one backward pass.

use scalargrad_core::{Graph, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();

    // f(x, y) = (x + y) * exp(x) / y
    let x = graph.leaf_labeled(0.5, "x");
    let y = graph.leaf_labeled(2.0, "y");

    let sum = graph.add(x, y);
    let ex = graph.exp(x);
    let numerator = graph.mul(sum, ex);
    let f = graph.div(numerator, y)?;

    println!("f(0.5, 2.0) = {:.6}", graph.value(f));

    graph.backward(f);
    println!("df/dx = {:.6}", graph.grad(x));
    println!("df/dy = {:.6}", graph.grad(y));

    // Gradients accumulate across passes; reset before differentiating a
    // second expression over the same leaves.
    graph.zero_grad();
    let square = graph.mul(x, x);
    graph.backward(square);
    println!("d(x*x)/dx = {:.6}", graph.grad(x));

    Ok(())
}
