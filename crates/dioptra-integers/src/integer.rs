//! Arbitrary precision integers.
//!
//! This module wraps `dashu::IBig` and exposes the exact operations the
//! Diophantine searches rely on: integer square roots, checked exact
//! division and Euclidean remainders, all delegated to `dashu`.

use dashu::base::{Abs, DivRem, RemEuclid, Signed as DashuSigned, SquareRootRem, UnsignedAbs};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Rem, Sub};

/// An arbitrary precision integer.
///
/// All arithmetic is exact; no operation in this crate goes through
/// floating point.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns true if this integer is divisible by two.
    #[must_use]
    pub fn is_even(&self) -> bool {
        self.rem_euclid(&Self::new(2)).is_zero()
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Attempts to convert to an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Square root and remainder of a non-negative integer.
    fn sqrt_rem(&self) -> Option<(Self, Self)> {
        if self.is_negative() {
            return None;
        }
        let (root, rem) = self.0.clone().unsigned_abs().sqrt_rem();
        Some((Self(IBig::from(root)), Self(IBig::from(rem))))
    }

    /// Floor of the square root, or `None` for negative inputs.
    #[must_use]
    pub fn isqrt(&self) -> Option<Self> {
        self.sqrt_rem().map(|(root, _)| root)
    }

    /// Returns `Some(r)` with `r * r == self` if `self` is a perfect square.
    #[must_use]
    pub fn exact_sqrt(&self) -> Option<Self> {
        match self.sqrt_rem()? {
            (root, rem) if rem.is_zero() => Some(root),
            _ => None,
        }
    }

    /// Divides exactly, returning `None` when `divisor` is zero or does
    /// not divide `self`.
    #[must_use]
    pub fn div_exact(&self, divisor: &Self) -> Option<Self> {
        if divisor.is_zero() {
            return None;
        }
        let (quotient, rem) = self.0.clone().div_rem(divisor.0.clone());
        rem.is_zero().then_some(Self(quotient))
    }

    /// Non-negative remainder modulo `|modulus|`.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is zero.
    #[must_use]
    pub fn rem_euclid(&self, modulus: &Self) -> Self {
        assert!(!modulus.is_zero(), "modulus cannot be zero");
        Self(IBig::from(self.0.clone().rem_euclid(modulus.0.clone())))
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Implements a binary operator for owned, borrowed and mixed operands.
macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Integer {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self($trait::$method(self.0, rhs.0))
            }
        }

        impl $trait<&Integer> for Integer {
            type Output = Self;

            fn $method(self, rhs: &Integer) -> Self::Output {
                Self($trait::$method(self.0, &rhs.0))
            }
        }

        impl $trait for &Integer {
            type Output = Integer;

            fn $method(self, rhs: Self) -> Self::Output {
                Integer($trait::$method(&self.0, &rhs.0))
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);
forward_binop!(Rem, rem);

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}
