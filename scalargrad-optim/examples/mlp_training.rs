// Trains a small tanh MLP on XOR with batch gradient descent.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{Mlp, Module};
use scalargrad_core::ops::loss::sse_op;
use scalargrad_core::{Activation, Graph, ScalarGradError};
use scalargrad_optim::{BatchGradientDescent, Optimizer};

fn main() -> Result<(), ScalarGradError> {
    let samples: [(f64, f64, f64); 4] = [
        (0.0, 0.0, 0.0),
        (0.0, 1.0, 1.0),
        (1.0, 0.0, 1.0),
        (1.0, 1.0, 0.0),
    ];

    let mut rng = StdRng::seed_from_u64(7);
    let mut graph = Graph::new();
    let model = Mlp::new(&mut rng, &mut graph, 2, &[4, 1], Activation::Tanh);
    let params = model.parameters();
    let mark = graph.mark();

    let mut optim = BatchGradientDescent::new(0.2, samples.len());
    for epoch in 0..2000 {
        let mut total = 0.0;
        for &(a, b, target) in &samples {
            let inputs = vec![graph.leaf(a), graph.leaf(b)];
            let outputs = model.forward(&mut graph, &inputs)?;
            let loss = sse_op(&mut graph, outputs[0], target)?;
            total += graph.value(loss);
            graph.backward(loss);
        }
        optim.step(&mut graph, &params);
        graph.truncate(mark);

        if epoch % 200 == 0 {
            println!("epoch {epoch:4}: summed loss {total:.5}");
        }
    }

    for &(a, b, target) in &samples {
        let inputs = vec![graph.leaf(a), graph.leaf(b)];
        let outputs = model.forward(&mut graph, &inputs)?;
        println!(
            "({a}, {b}) -> {:.3} (target {target})",
            graph.value(outputs[0])
        );
        graph.truncate(mark);
    }
    Ok(())
}
