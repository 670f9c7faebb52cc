// Linear regression on synthetic data with a hand-rolled update loop,
// using only the core crate: leaves for the parameters, one loss graph per
// sample, manual gradient-descent updates via set_value.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scalargrad_core::ops::loss::sse_op;
use scalargrad_core::{Graph, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    let mut rng = StdRng::seed_from_u64(42);

    // y = 3x + 0.5 plus a little noise.
    let samples: Vec<(f64, f64)> = (0..64)
        .map(|_| {
            let x: f64 = rng.gen_range(-1.0..1.0);
            let noise: f64 = rng.gen_range(-0.05..0.05);
            (x, 3.0 * x + 0.5 + noise)
        })
        .collect();

    let mut graph = Graph::new();
    let w = graph.leaf_labeled(rng.gen_range(-1.0..1.0), "w");
    let b = graph.leaf_labeled(rng.gen_range(-1.0..1.0), "b");
    let mark = graph.mark();

    let learning_rate = 0.1;
    for epoch in 0..200 {
        let mut epoch_loss = 0.0;
        for &(x, y) in &samples {
            let input = graph.leaf(x);
            let wx = graph.mul(w, input);
            let prediction = graph.add(wx, b);
            let loss = sse_op(&mut graph, prediction, y)?;
            epoch_loss += graph.value(loss);
            graph.backward(loss);
        }

        // Mean-gradient update, then drop the epoch's expression nodes.
        for &param in &[w, b] {
            let update = learning_rate * graph.grad(param) / samples.len() as f64;
            graph.set_value(param, graph.value(param) - update);
            graph.clear_grad(param);
        }
        graph.truncate(mark);

        if epoch % 20 == 0 {
            println!(
                "epoch {epoch:3}: loss {:.5}, w {:.4}, b {:.4}",
                epoch_loss / samples.len() as f64,
                graph.value(w),
                graph.value(b)
            );
        }
    }

    println!("fitted: w = {:.4}, b = {:.4}", graph.value(w), graph.value(b));
    Ok(())
}
