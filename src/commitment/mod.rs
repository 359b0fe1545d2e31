//! Homomorphic commitments to rational numbers over BN254 G1

mod rational;

pub use rational::{
    commit, construct_pair, verify_rational_sum, RationalCommitment, RationalCommitmentPair,
};
