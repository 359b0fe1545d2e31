//! Matrix engine: dimension-checked `n × n` matrix times vector
//!
//! The matrix is a row-major slice of `n * n` scalars. Each output entry is
//! accumulated left to right from column 0, which fixes the evaluation order
//! independently of whether the supplied ops happen to be commutative.

use super::ops::{ArithmeticOps, EcOps};
use crate::curve::Point;
use crate::error::{Error, Result};
use log::{debug, trace};
use primitive_types::U256;

/// Check `len(matrix) == n * n` and `len(vector) == n`.
pub(crate) fn check_dimensions(matrix_len: usize, n: usize, vector_len: usize) -> Result<()> {
    let Some(cells) = n.checked_mul(n) else {
        debug!("Matrix side {} overflows usize when squared", n);
        return Err(Error::InvalidDimensions {
            what: "matrix",
            expected: usize::MAX,
            found: matrix_len,
        });
    };
    if matrix_len != cells {
        debug!("Matrix has {} entries, expected {}x{}", matrix_len, n, n);
        return Err(Error::InvalidDimensions {
            what: "matrix",
            expected: cells,
            found: matrix_len,
        });
    }
    if vector_len != n {
        debug!("Vector has {} entries, expected {}", vector_len, n);
        return Err(Error::InvalidDimensions {
            what: "vector",
            expected: n,
            found: vector_len,
        });
    }
    Ok(())
}

/// `matrix · vector` over the domain of `ops`.
///
/// Fails with `InvalidDimensions` before any arithmetic if the lengths do
/// not match `n`. Arithmetic errors from `ops` abort the whole product.
pub fn matrix_mul_basic<O: ArithmeticOps>(
    matrix: &[U256],
    n: usize,
    vector: &[O::Element],
    ops: &O,
) -> Result<Vec<O::Element>> {
    check_dimensions(matrix.len(), n, vector.len())?;

    let mut result = Vec::with_capacity(n);
    for (i, row) in matrix.chunks_exact(n.max(1)).take(n).enumerate() {
        let mut acc = ops.multiply(&row[0], &vector[0])?;
        for (entry, element) in row.iter().zip(vector).skip(1) {
            let term = ops.multiply(entry, element)?;
            acc = ops.add(&acc, &term)?;
        }
        trace!("Row {} accumulated", i);
        result.push(acc);
    }
    Ok(result)
}

/// `matrix · points` in the curve group: `result[i] = Σ_j matrix[i][j] · points[j]`.
pub fn matrix_mul_ec(matrix: &[U256], n: usize, points: &[Point]) -> Result<Vec<Point>> {
    matrix_mul_basic(matrix, n, points, &EcOps)
}
