//! BN254 G1: the prime-order group every commitment lives in
//!
//! - **Point**: raw affine coordinates with the `(0, 0)` identity sentinel
//! - **Group**: membership test, addition, double-and-add scalar multiplication
//!
//! Curve parameters are fixed and read from `ark-bn254`.

mod group;
mod point;

pub use group::{ec_add, ec_mul, is_on_curve};
pub use point::Point;

use ark_bn254::{Fq, Fr};
use ark_ff::PrimeField;
use primitive_types::U256;

/// Base-field prime `p`
pub const FIELD_MODULUS: U256 = U256(<Fq as PrimeField>::MODULUS.0);

/// Prime group order `r`; scalars and commitment arithmetic live mod `r`
pub const GROUP_ORDER: U256 = U256(<Fr as PrimeField>::MODULUS.0);

/// Curve constant `b` in `y² = x³ + b`
pub const CURVE_B: u64 = 3;
