//! Generic matrix-vector multiplication
//!
//! - **ops**: the `ArithmeticOps` capability and its integer, modular and
//!   curve-group implementations
//! - **engine**: the dimension-checked multiply-accumulate over any of them

mod engine;
mod ops;

pub(crate) use engine::check_dimensions;
pub use engine::{matrix_mul_basic, matrix_mul_ec};
pub use ops::{ArithmeticOps, EcOps, IntegerOps, ModularOps};
