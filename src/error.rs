//! Error type shared by every verification routine

use crate::curve::Point;
use primitive_types::U256;

/// Errors raised by curve, modular, commitment and matrix operations.
///
/// All of them are data-dependent: retrying with the same inputs fails the
/// same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid matrix or vector dimensions: {what} has length {found}, expected {expected}")]
    InvalidDimensions {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("No inverse exists for 0 modulo {modulus}")]
    InvalidInverse { modulus: U256 },

    #[error("Point is not on the curve: {0}")]
    InvalidPoint(Point),

    #[error("Modulus must be at least 2, got {0}")]
    InvalidModulus(U256),

    #[error("Integer overflow in {0}")]
    ArithmeticOverflow(&'static str),

    #[error("Malformed encoding: {0}")]
    Encoding(String),
}

pub type Result<T> = std::result::Result<T, Error>;
