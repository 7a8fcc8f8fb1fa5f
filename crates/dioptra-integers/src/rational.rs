//! Exact rational numbers.
//!
//! Used where a construction may legitimately produce a fraction and the
//! caller wants the exact value rather than a rounded one.

use dashu::base::UnsignedAbs;
use dashu::rational::RBig;
use num_traits::Zero;
use std::fmt;

use crate::Integer;

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        let sign_flip = denominator.is_negative();
        let value = RBig::from_parts(
            numerator.into_inner(),
            denominator.into_inner().unsigned_abs(),
        );
        if sign_flip {
            Self(-value)
        } else {
            Self(value)
        }
    }

    /// Creates `numerator / 2`.
    #[must_use]
    pub fn half_of(numerator: Integer) -> Self {
        Self::new(numerator, Integer::new(2))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(dashu::integer::IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        if self.is_integer() {
            Some(self.numerator())
        } else {
            None
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self.0)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}
