// scalargrad-core/src/ops/mod.rs

pub mod activation;
pub mod arithmetic;
pub mod loss;
pub mod math_elem;
