//! Claim verification for matrix-vector products
//!
//! A claim is checked by exact recomputation over plain integers.

use crate::commitment::RationalCommitment;
use crate::curve::Point;
use crate::error::{Error, Result};
use crate::matrix::{check_dimensions, matrix_mul_basic, IntegerOps};
use log::debug;
use primitive_types::U256;

/// Check that `claimed_output == matrix · s` over 256-bit integers.
///
/// All three lengths are checked before any arithmetic. A wrong claim is
/// `Ok(false)`, not an error.
///
/// `generator` and `commitments` are accepted so a commitment-based check can
/// be slotted in later; today the verdict comes from full `O(n²)`
/// recomputation and neither is read.
pub fn verify_matrix_mult_claim(
    matrix: &[U256],
    n: usize,
    s: &[U256],
    _generator: &Point,
    claimed_output: &[U256],
    _commitments: &RationalCommitment,
) -> Result<bool> {
    check_dimensions(matrix.len(), n, s.len())?;
    if claimed_output.len() != n {
        debug!(
            "Claimed output has {} entries, expected {}",
            claimed_output.len(),
            n
        );
        return Err(Error::InvalidDimensions {
            what: "claimed output",
            expected: n,
            found: claimed_output.len(),
        });
    }

    let expected = matrix_mul_basic(matrix, n, s, &IntegerOps)?;
    match expected
        .iter()
        .zip(claimed_output)
        .position(|(e, c)| e != c)
    {
        Some(row) => {
            debug!(
                "Claim rejected at row {}: expected {}, claimed {}",
                row, expected[row], claimed_output[row]
            );
            Ok(false)
        }
        None => Ok(true),
    }
}
