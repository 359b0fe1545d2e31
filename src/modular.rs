//! Modular arithmetic over an arbitrary runtime modulus
//!
//! Products and sums are formed in 512 bits and reduced immediately, so no
//! routine here ever relies on 256-bit wraparound. `fermat_inv` is the one
//! inversion primitive of the crate: it serves both base-field helpers and
//! denominators in the scalar field.

use crate::error::{Error, Result};
use primitive_types::{U256, U512};

fn widen(value: U256) -> U512 {
    U512::from(value)
}

/// Narrow a value already reduced below a 256-bit modulus.
fn narrow(value: U512) -> U256 {
    let mut bytes = [0u8; 64];
    value.to_big_endian(&mut bytes);
    U256::from_big_endian(&bytes[32..])
}

fn check_modulus(m: U256) -> Result<()> {
    if m < U256::from(2u8) {
        return Err(Error::InvalidModulus(m));
    }
    Ok(())
}

/// `(a + b) mod m`
pub fn add_mod(a: U256, b: U256, m: U256) -> Result<U256> {
    check_modulus(m)?;
    Ok(narrow((widen(a) + widen(b)) % widen(m)))
}

/// `(a * b) mod m`
pub fn mul_mod(a: U256, b: U256, m: U256) -> Result<U256> {
    check_modulus(m)?;
    Ok(narrow((widen(a) * widen(b)) % widen(m)))
}

/// `base^exp mod m` by left-to-right square-and-multiply.
pub fn pow_mod(base: U256, exp: U256, m: U256) -> Result<U256> {
    check_modulus(m)?;
    let base = base % m;
    let mut result = U256::one();
    for i in (0..exp.bits()).rev() {
        result = mul_mod(result, result, m)?;
        if exp.bit(i) {
            result = mul_mod(result, base, m)?;
        }
    }
    Ok(result)
}

/// Multiplicative inverse of `a` modulo the prime `p`, computed as
/// `a^(p-2) mod p` (Fermat's little theorem).
///
/// `p` must be prime; that is not checked. Fails with
/// [`Error::InvalidInverse`] when `a ≡ 0 (mod p)`.
pub fn fermat_inv(a: U256, p: U256) -> Result<U256> {
    check_modulus(p)?;
    let a = a % p;
    if a.is_zero() {
        return Err(Error::InvalidInverse { modulus: p });
    }
    pow_mod(a, p - U256::from(2u8), p)
}
