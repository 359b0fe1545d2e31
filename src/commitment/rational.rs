//! RationalCommitment: commit to `n/d` as the point `(n · d⁻¹ mod r) · G`
//!
//! The map from rationals reduced mod `r` into G1 is a group homomorphism,
//! so `commit(a/da) + commit(b/db) = commit(a/da + b/db)`. A verifier holding
//! two commitments can therefore check a claimed sum without ever seeing the
//! numerators or denominators. Every comparison is exact equality of points.

use crate::curve::{ec_add, ec_mul, is_on_curve, Point, GROUP_ORDER};
use crate::error::{Error, Result};
use crate::modular::{fermat_inv, mul_mod};
use log::debug;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Commitments to two rationals, in the order they were supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RationalCommitmentPair {
    pub a: Point,
    pub b: Point,
}

/// `(n · d⁻¹ mod r) · g`. Fails with `InvalidInverse` when `d ≡ 0 (mod r)`;
/// no point is produced in that case.
pub fn commit(numerator: U256, denominator: U256, generator: &Point) -> Result<Point> {
    let inv = fermat_inv(denominator, GROUP_ORDER)?;
    let scalar = mul_mod(numerator, inv, GROUP_ORDER)?;
    ec_mul(generator, scalar)
}

/// Commit to `a/da` and `b/db` under the same generator.
pub fn construct_pair(
    a: U256,
    da: U256,
    b: U256,
    db: U256,
    generator: &Point,
) -> Result<RationalCommitmentPair> {
    Ok(RationalCommitmentPair {
        a: commit(a, da, generator)?,
        b: commit(b, db, generator)?,
    })
}

/// Check that the rationals committed in `a` and `b` sum to `num/den`.
///
/// A wrong sum is `Ok(false)`; errors are reserved for malformed input
/// (off-curve commitments, zero denominator).
pub fn verify_rational_sum(
    a: &Point,
    b: &Point,
    num: U256,
    den: U256,
    generator: &Point,
) -> Result<bool> {
    let sum = ec_add(a, b)?;
    let expected = commit(num, den, generator)?;
    let ok = sum == expected;
    if !ok {
        debug!("Rational sum mismatch: A + B = {}, commit({}/{}) = {}", sum, num, den, expected);
    }
    Ok(ok)
}

/// Stateless commitment service bound to one generator.
///
/// Holding the generator here is only a convenience; every method is a pure
/// function of its arguments and the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RationalCommitment {
    generator: Point,
}

impl Default for RationalCommitment {
    fn default() -> Self {
        Self {
            generator: Point::GENERATOR,
        }
    }
}

impl RationalCommitment {
    /// Bind to a custom generator; it must be a curve point.
    pub fn new(generator: Point) -> Result<Self> {
        if !is_on_curve(&generator) {
            return Err(Error::InvalidPoint(generator));
        }
        Ok(Self { generator })
    }

    pub fn generator(&self) -> &Point {
        &self.generator
    }

    pub fn commit(&self, numerator: U256, denominator: U256) -> Result<Point> {
        commit(numerator, denominator, &self.generator)
    }

    pub fn construct_pair(
        &self,
        a: U256,
        da: U256,
        b: U256,
        db: U256,
    ) -> Result<RationalCommitmentPair> {
        construct_pair(a, da, b, db, &self.generator)
    }

    pub fn verify_rational_sum(&self, a: &Point, b: &Point, num: U256, den: U256) -> Result<bool> {
        verify_rational_sum(a, b, num, den, &self.generator)
    }

    pub fn verify_pair_sum(&self, pair: &RationalCommitmentPair, num: U256, den: U256) -> Result<bool> {
        self.verify_rational_sum(&pair.a, &pair.b, num, den)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(v: u64) -> U256 {
        U256::from(v)
    }

    fn dec(s: &str) -> U256 {
        U256::from_dec_str(s).unwrap()
    }

    #[test]
    fn test_commit_integer_matches_scalar_mul() {
        let g = Point::GENERATOR;
        assert_eq!(commit(u(5), u(1), &g).unwrap(), ec_mul(&g, u(5)).unwrap());
        assert_eq!(commit(u(0), u(9), &g).unwrap(), Point::ZERO);
        // 6/3 and 2/1 are the same rational
        assert_eq!(commit(u(6), u(3), &g).unwrap(), commit(u(2), u(1), &g).unwrap());
    }

    #[test]
    fn test_construct_pair_known_vectors() {
        let rc = RationalCommitment::default();
        let pair = rc.construct_pair(u(3), u(4), u(2), u(5)).unwrap();

        assert!(is_on_curve(&pair.a));
        assert!(is_on_curve(&pair.b));
        assert_eq!(
            pair.a,
            Point::new(
                dec("2857625431839718922471812833357737477490018756027287331750692909542658596388"),
                dec("1911129795864509240059974873783816568594673160967429852131769465429209708149"),
            )
        );
        assert_eq!(
            pair.b,
            Point::new(
                dec("388140526357927308015211187808346386702734206185696013279200609425519407903"),
                dec("1004033754869722800279829572743116817610584456773029655758286223146239644383"),
            )
        );
    }

    #[test]
    fn test_zero_denominator() {
        let rc = RationalCommitment::default();
        assert!(matches!(
            rc.construct_pair(u(1), u(0), u(1), u(1)),
            Err(Error::InvalidInverse { .. })
        ));
        assert!(matches!(
            rc.construct_pair(u(1), u(1), u(1), u(0)),
            Err(Error::InvalidInverse { .. })
        ));
        // r itself reduces to zero
        assert!(matches!(
            rc.commit(u(1), GROUP_ORDER),
            Err(Error::InvalidInverse { .. })
        ));
    }

    #[test]
    fn test_verify_rational_sum() {
        let g = Point::GENERATOR;
        let a = commit(u(1), u(2), &g).unwrap();
        let b = commit(u(1), u(3), &g).unwrap();

        assert!(verify_rational_sum(&a, &b, u(5), u(6), &g).unwrap());
        assert!(!verify_rational_sum(&a, &b, u(1), u(2), &g).unwrap());
        // equivalent fraction of the correct sum
        assert!(verify_rational_sum(&a, &b, u(10), u(12), &g).unwrap());
    }

    #[test]
    fn test_verify_pair_sum() {
        let rc = RationalCommitment::default();
        let pair = rc.construct_pair(u(3), u(4), u(2), u(5)).unwrap();
        // 3/4 + 2/5 = 23/20
        assert!(rc.verify_pair_sum(&pair, u(23), u(20)).unwrap());
        assert!(!rc.verify_pair_sum(&pair, u(5), u(9)).unwrap());
    }

    #[test]
    fn test_verify_rejects_zero_denominator_and_bad_points() {
        let rc = RationalCommitment::default();
        let a = rc.commit(u(1), u(2)).unwrap();
        assert!(matches!(
            rc.verify_rational_sum(&a, &a, u(1), u(0)),
            Err(Error::InvalidInverse { .. })
        ));

        let bad = Point::new(u(1), u(3));
        assert_eq!(
            rc.verify_rational_sum(&a, &bad, u(1), u(1)),
            Err(Error::InvalidPoint(bad))
        );
    }

    #[test]
    fn test_custom_generator() {
        let two_g = ec_mul(&Point::GENERATOR, u(2)).unwrap();
        let rc = RationalCommitment::new(two_g).unwrap();
        assert_eq!(rc.generator(), &two_g);
        // 1/2 under 2G is G
        assert_eq!(rc.commit(u(1), u(2)).unwrap(), Point::GENERATOR);

        assert!(matches!(
            RationalCommitment::new(Point::ZERO),
            Err(Error::InvalidPoint(_))
        ));
    }
}
