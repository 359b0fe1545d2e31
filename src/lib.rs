//! RatMat: rational commitments and matrix claim verification on BN254
//!
//! Pure, stateless verification primitives over the BN254 G1 group:
//! curve arithmetic, Fermat inversion, homomorphic commitments to rationals,
//! a matrix-vector engine generic over its arithmetic, and a claim verifier
//! built on top of it.

pub mod commitment;
pub mod curve;
pub mod error;
pub mod matrix;
pub mod modular;
pub mod verifier;

pub use commitment::{RationalCommitment, RationalCommitmentPair};
pub use curve::{ec_add, ec_mul, is_on_curve, Point};
pub use error::{Error, Result};
pub use matrix::{matrix_mul_basic, matrix_mul_ec, ArithmeticOps, EcOps, IntegerOps, ModularOps};
pub use modular::fermat_inv;
pub use verifier::{verify_matrix_mult_claim, MatrixClaim, RationalSumClaim};
