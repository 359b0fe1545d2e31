//! Claim verification
//!
//! - **claim**: exact recomputation check of a matrix-vector product
//! - **document**: JSON claim files for matrix products and rational sums

mod claim;
pub mod document;

pub use claim::verify_matrix_mult_claim;
pub use document::{MatrixClaim, RationalSumClaim};
