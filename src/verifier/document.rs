//! Claim documents: JSON files describing a claim to verify
//!
//! Integers are `0x`-prefixed hex strings, the serde form of `U256`.
//!
//! ```json
//! { "n": 2, "matrix": ["0x2", "0x3", "0x1", "0x4"], "vector": ["0x5", "0x7"],
//!   "claimed_output": ["0x1f", "0x21"] }
//! ```

use super::claim::verify_matrix_mult_claim;
use crate::commitment::RationalCommitment;
use crate::curve::Point;
use crate::error::Result;
use log::info;
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Claim that `claimed_output = matrix · vector`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixClaim {
    pub n: usize,
    /// Row-major, `n * n` entries
    pub matrix: Vec<U256>,
    pub vector: Vec<U256>,
    pub claimed_output: Vec<U256>,
}

impl MatrixClaim {
    pub fn verify(&self, commitments: &RationalCommitment) -> Result<bool> {
        verify_matrix_mult_claim(
            &self.matrix,
            self.n,
            &self.vector,
            commitments.generator(),
            &self.claimed_output,
            commitments,
        )
    }

    pub fn save(&self, path: impl AsRef<Path>) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let claim: Self = serde_json::from_str(&json)?;
        info!("Loaded {}x{} matrix claim from {}", claim.n, claim.n, path.display());
        Ok(claim)
    }
}

/// Claim that the rationals committed in `a` and `b` sum to
/// `numerator / denominator`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RationalSumClaim {
    pub a: Point,
    pub b: Point,
    pub numerator: U256,
    pub denominator: U256,
    /// Defaults to the standard generator when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<Point>,
}

impl RationalSumClaim {
    pub fn verify(&self) -> Result<bool> {
        let commitments = match self.generator {
            Some(g) => RationalCommitment::new(g)?,
            None => RationalCommitment::default(),
        };
        commitments.verify_rational_sum(&self.a, &self.b, self.numerator, self.denominator)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let claim = serde_json::from_str(&json)?;
        info!("Loaded rational sum claim from {}", path.display());
        Ok(claim)
    }
}
