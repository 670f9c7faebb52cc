// scalargrad-core/src/ops/math_elem/mod.rs

pub mod exp;
pub mod ln;

pub use exp::exp_op;
pub use ln::ln_op;
