//! ArithmeticOps: the two-operation capability the matrix engine runs on
//!
//! `multiply` is positional: the first operand is always a plain scalar (a
//! matrix entry) and the second is always a domain element. Keeping that
//! contract in every implementation lets one multiply-accumulate loop run
//! over integers, residues or curve points.

use crate::curve::{ec_add, ec_mul, Point, GROUP_ORDER};
use crate::error::{Error, Result};
use crate::modular::{add_mod, mul_mod};
use primitive_types::U256;

/// Stateless `multiply`/`add` over some domain. Implementations must not
/// have side effects.
pub trait ArithmeticOps {
    type Element: Clone;

    /// `scalar · element`
    fn multiply(&self, scalar: &U256, element: &Self::Element) -> Result<Self::Element>;

    /// `lhs + rhs`
    fn add(&self, lhs: &Self::Element, rhs: &Self::Element) -> Result<Self::Element>;
}

/// Plain 256-bit integer arithmetic. Overflow is an error, never a wrap.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerOps;

impl ArithmeticOps for IntegerOps {
    type Element = U256;

    fn multiply(&self, scalar: &U256, element: &U256) -> Result<U256> {
        scalar
            .checked_mul(*element)
            .ok_or(Error::ArithmeticOverflow("multiply"))
    }

    fn add(&self, lhs: &U256, rhs: &U256) -> Result<U256> {
        lhs.checked_add(*rhs).ok_or(Error::ArithmeticOverflow("add"))
    }
}

/// Curve-group arithmetic: `multiply` is scalar multiplication, `add` is
/// point addition.
#[derive(Debug, Clone, Copy, Default)]
pub struct EcOps;

impl ArithmeticOps for EcOps {
    type Element = Point;

    fn multiply(&self, scalar: &U256, element: &Point) -> Result<Point> {
        ec_mul(element, *scalar)
    }

    fn add(&self, lhs: &Point, rhs: &Point) -> Result<Point> {
        ec_add(lhs, rhs)
    }
}

/// Arithmetic in `Z_m`.
#[derive(Debug, Clone, Copy)]
pub struct ModularOps {
    modulus: U256,
}

impl ModularOps {
    pub fn new(modulus: U256) -> Result<Self> {
        if modulus < U256::from(2u8) {
            return Err(Error::InvalidModulus(modulus));
        }
        Ok(Self { modulus })
    }

    /// Residues mod the group order `r`
    pub fn scalar_field() -> Self {
        Self {
            modulus: GROUP_ORDER,
        }
    }

    pub fn modulus(&self) -> U256 {
        self.modulus
    }
}

impl ArithmeticOps for ModularOps {
    type Element = U256;

    fn multiply(&self, scalar: &U256, element: &U256) -> Result<U256> {
        mul_mod(*scalar, *element, self.modulus)
    }

    fn add(&self, lhs: &U256, rhs: &U256) -> Result<U256> {
        add_mod(*lhs, *rhs, self.modulus)
    }
}
