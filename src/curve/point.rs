//! Point: raw BN254 G1 coordinates as callers hand them in
//!
//! Coordinates are kept as plain 256-bit integers rather than field elements
//! so that out-of-range input stays representable and is rejected by
//! validation instead of being silently reduced.

use crate::error::{Error, Result};
use ark_bn254::{Fq, G1Affine};
use ark_ff::{BigInt, PrimeField};
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A G1 point in affine coordinates. `(0, 0)` is the "no point" sentinel,
/// read and produced as the group identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: U256,
    pub y: U256,
}

impl Point {
    /// The `(0, 0)` sentinel
    pub const ZERO: Point = Point {
        x: U256([0, 0, 0, 0]),
        y: U256([0, 0, 0, 0]),
    };

    /// The standard generator `G = (1, 2)`
    pub const GENERATOR: Point = Point {
        x: U256([1, 0, 0, 0]),
        y: U256([2, 0, 0, 0]),
    };

    pub fn new(x: U256, y: U256) -> Self {
        Self { x, y }
    }

    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Map an arkworks affine point back to raw coordinates.
    pub(crate) fn from_affine(p: &G1Affine) -> Self {
        if p.infinity {
            return Self::ZERO;
        }
        Self {
            x: U256(p.x.into_bigint().0),
            y: U256(p.y.into_bigint().0),
        }
    }

    /// 64-byte encoding: x then y, 32-byte big-endian each.
    pub fn to_be_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        self.x.to_big_endian(&mut out[..32]);
        self.y.to_big_endian(&mut out[32..]);
        out
    }

    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 64 {
            return Err(Error::Encoding(format!(
                "expected 64 bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self {
            x: U256::from_big_endian(&bytes[..32]),
            y: U256::from_big_endian(&bytes[32..]),
        })
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_be_bytes())
    }

    /// Parse the 64-byte hex form, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| Error::Encoding(e.to_string()))?;
        Self::from_be_bytes(&bytes)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Lift a raw coordinate into the base field; `None` when it is `>= p`.
pub(crate) fn to_base_field(value: U256) -> Option<Fq> {
    Fq::from_bigint(BigInt::new(value.0))
}
