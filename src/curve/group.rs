//! Group operations on BN254 G1
//!
//! Operands are validated before use: anything that is neither the identity
//! sentinel nor a point satisfying `y² = x³ + 3` over the base field is
//! rejected with [`Error::InvalidPoint`]. The group law itself is arkworks'
//! projective arithmetic; scalar multiplication is a fixed MSB-first
//! double-and-add over the scalar's bits.

use super::point::{to_base_field, Point};
use crate::error::{Error, Result};
use ark_bn254::{g1::Config as G1Config, Fq, G1Affine, G1Projective};
use ark_ec::short_weierstrass::SWCurveConfig;
use ark_ec::CurveGroup;
use ark_ff::{AdditiveGroup, Field, Zero};
use primitive_types::U256;

/// Base-field coordinates of `p` if it is a genuine curve point.
fn curve_coordinates(p: &Point) -> Option<(Fq, Fq)> {
    if p.is_identity() {
        return None;
    }
    let x = to_base_field(p.x)?;
    let y = to_base_field(p.y)?;
    (y.square() == x.square() * x + G1Config::COEFF_B).then_some((x, y))
}

/// True iff `p` is not the sentinel, both coordinates lie in `[0, p)` and
/// `p.y² ≡ p.x³ + b`.
pub fn is_on_curve(p: &Point) -> bool {
    curve_coordinates(p).is_some()
}

fn to_projective(p: &Point) -> Result<G1Projective> {
    if p.is_identity() {
        return Ok(G1Projective::zero());
    }
    let (x, y) = curve_coordinates(p).ok_or(Error::InvalidPoint(*p))?;
    Ok(G1Affine::new_unchecked(x, y).into())
}

fn from_projective(p: G1Projective) -> Point {
    Point::from_affine(&p.into_affine())
}

/// `p + q` under the curve group law.
pub fn ec_add(p: &Point, q: &Point) -> Result<Point> {
    let sum = to_projective(p)? + to_projective(q)?;
    Ok(from_projective(sum))
}

/// `k · p`. `k = 0` gives the identity; scalars at or above the group order
/// wrap by the group structure.
pub fn ec_mul(p: &Point, k: U256) -> Result<Point> {
    let base = to_projective(p)?;
    let mut acc = G1Projective::zero();
    for i in (0..k.bits()).rev() {
        acc.double_in_place();
        if k.bit(i) {
            acc += base;
        }
    }
    Ok(from_projective(acc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{FIELD_MODULUS, GROUP_ORDER};
    use crate::modular::add_mod;
    use ark_bn254::Fr;
    use ark_ff::{PrimeField, UniformRand};

    fn dec(s: &str) -> U256 {
        U256::from_dec_str(s).unwrap()
    }

    fn g() -> Point {
        Point::GENERATOR
    }

    fn two_g() -> Point {
        Point::new(
            dec("1368015179489954701390400359078579693043519447331113978918064868415326638035"),
            dec("9918110051302171585080402603319702774565515993150576347155970296011118125764"),
        )
    }

    fn three_g() -> Point {
        Point::new(
            dec("3353031288059533942658390886683067124040920775575537747144343083137631628272"),
            dec("19321533766552368860946552437480515441416830039777911637913418824951667761761"),
        )
    }

    fn random_scalar(rng: &mut impl ark_std::rand::Rng) -> U256 {
        U256(Fr::rand(rng).into_bigint().0)
    }

    #[test]
    fn test_known_points_on_curve() {
        assert!(is_on_curve(&g()));
        assert!(is_on_curve(&two_g()));
        assert!(is_on_curve(&three_g()));
    }

    #[test]
    fn test_sentinel_never_on_curve() {
        assert!(!is_on_curve(&Point::ZERO));
    }

    #[test]
    fn test_off_curve_and_out_of_range() {
        assert!(!is_on_curve(&Point::new(U256::from(1u8), U256::from(3u8))));
        // (1, 2 + p) satisfies the equation only after reduction
        let shifted = Point::new(U256::one(), U256::from(2u8) + FIELD_MODULUS);
        assert!(!is_on_curve(&shifted));
        // x = 0 forces y² = 3
        assert!(!is_on_curve(&Point::new(U256::zero(), U256::from(2u8))));
    }

    #[test]
    fn test_ec_mul_small_multiples() {
        assert_eq!(ec_mul(&g(), U256::from(2u8)).unwrap(), two_g());
        assert_eq!(ec_mul(&g(), U256::from(3u8)).unwrap(), three_g());
        assert_eq!(ec_mul(&g(), U256::one()).unwrap(), g());
    }

    #[test]
    fn test_ec_add_doubling_and_chord() {
        assert_eq!(ec_add(&g(), &g()).unwrap(), two_g());
        assert_eq!(ec_add(&g(), &two_g()).unwrap(), three_g());
        assert_eq!(ec_add(&two_g(), &g()).unwrap(), three_g());
    }

    #[test]
    fn test_identity_handling() {
        assert_eq!(ec_mul(&g(), U256::zero()).unwrap(), Point::ZERO);
        assert_eq!(ec_mul(&g(), GROUP_ORDER).unwrap(), Point::ZERO);
        assert_eq!(ec_mul(&Point::ZERO, U256::from(7u8)).unwrap(), Point::ZERO);
        assert_eq!(ec_add(&Point::ZERO, &g()).unwrap(), g());
        assert_eq!(ec_add(&g(), &Point::ZERO).unwrap(), g());

        // G + (-G) = O
        let neg_g = Point::new(U256::one(), FIELD_MODULUS - U256::from(2u8));
        assert!(is_on_curve(&neg_g));
        assert_eq!(ec_add(&g(), &neg_g).unwrap(), Point::ZERO);
        assert_eq!(ec_mul(&g(), GROUP_ORDER - U256::one()).unwrap(), neg_g);
    }

    #[test]
    fn test_scalar_wraps_mod_order() {
        let k = U256::from(5u8);
        assert_eq!(
            ec_mul(&g(), GROUP_ORDER + k).unwrap(),
            ec_mul(&g(), k).unwrap()
        );
    }

    #[test]
    fn test_invalid_operands_rejected() {
        let bad = Point::new(U256::one(), U256::from(3u8));
        assert_eq!(ec_add(&g(), &bad), Err(Error::InvalidPoint(bad)));
        assert_eq!(ec_add(&bad, &g()), Err(Error::InvalidPoint(bad)));
        assert_eq!(ec_mul(&bad, U256::one()), Err(Error::InvalidPoint(bad)));
        // validation happens even when the scalar is zero
        assert_eq!(ec_mul(&bad, U256::zero()), Err(Error::InvalidPoint(bad)));
    }

    #[test]
    fn test_multiples_stay_on_curve() {
        let mut rng = ark_std::test_rng();
        for _ in 0..16 {
            let k = random_scalar(&mut rng);
            if k.is_zero() {
                continue;
            }
            assert!(is_on_curve(&ec_mul(&g(), k).unwrap()));
        }
    }

    #[test]
    fn test_homomorphism() {
        let mut rng = ark_std::test_rng();
        for _ in 0..8 {
            let a = random_scalar(&mut rng);
            let b = random_scalar(&mut rng);
            let lhs = ec_add(&ec_mul(&g(), a).unwrap(), &ec_mul(&g(), b).unwrap()).unwrap();
            let rhs = ec_mul(&g(), add_mod(a, b, GROUP_ORDER).unwrap()).unwrap();
            assert_eq!(lhs, rhs);
        }
    }

    #[test]
    fn test_deterministic() {
        let k = dec("123456789012345678901234567890");
        assert_eq!(ec_mul(&g(), k).unwrap(), ec_mul(&g(), k).unwrap());
    }
}
