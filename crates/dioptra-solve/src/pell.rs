//! Sample solutions of the Pell-type equations `p² − 2q² = c`.
//!
//! The unit group of `Z[√2]` is generated by `1 + √2`, with `3 + 2√2`
//! generating the norm-one units. Every solution class of `p² − 2q² = c`
//! therefore has a fundamental member with
//!
//! - `0 ≤ p ≤ sqrt(2c)` when `c > 0`,
//! - `0 ≤ p ≤ sqrt(|c|)` when `c < 0`,
//!
//! so an ascending search over `p` up to that bound is complete: when it
//! finds nothing, the equation has no integer solution at all.

use std::fmt;

use dioptra_integers::Integer;
use num_traits::Zero;
use tracing::{info, warn};

use crate::error::{SolveError, SolveResult};

/// A non-negative solution `(p, q)` of a Pell-type equation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PellSolution {
    /// First component.
    pub p: Integer,
    /// Second component.
    pub q: Integer,
}

impl PellSolution {
    /// Creates a solution pair.
    #[must_use]
    pub fn new(p: Integer, q: Integer) -> Self {
        Self { p, q }
    }

    /// Creates a solution pair from machine integers.
    #[must_use]
    pub fn from_i64(p: i64, q: i64) -> Self {
        Self::new(Integer::new(p), Integer::new(q))
    }
}

impl fmt::Display for PellSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.p, self.q)
    }
}

/// The equation `p² − 2q² = c`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PellEquation {
    constant: Integer,
}

impl PellEquation {
    /// Creates the equation with right-hand side `constant`.
    #[must_use]
    pub fn new(constant: Integer) -> Self {
        Self { constant }
    }

    /// `a² − 2b² = 2z + 1`.
    #[must_use]
    pub fn for_z(z: u64) -> Self {
        Self::new(Integer::new(2) * Integer::from(z) + Integer::new(1))
    }

    /// `u² − 2v² = −2`, the equation whose solutions drive the recurrence.
    #[must_use]
    pub fn negative_two() -> Self {
        Self::new(Integer::new(-2))
    }

    /// Returns `c`.
    #[must_use]
    pub fn constant(&self) -> &Integer {
        &self.constant
    }

    /// Evaluates `p² − 2q²`.
    #[must_use]
    pub fn evaluate(&self, p: &Integer, q: &Integer) -> Integer {
        p * p - Integer::new(2) * q * q
    }

    /// Returns true if `(p, q)` solves the equation.
    #[must_use]
    pub fn is_solution(&self, p: &Integer, q: &Integer) -> bool {
        self.evaluate(p, q) == self.constant
    }

    /// Largest `p` a fundamental solution can have.
    #[must_use]
    pub fn search_bound(&self) -> Integer {
        let scaled = match self.constant.signum() {
            1 => Integer::new(2) * &self.constant,
            -1 => self.constant.abs(),
            _ => Integer::zero(),
        };
        scaled.isqrt().unwrap_or_else(Integer::zero)
    }

    /// Finds the solution with the smallest non-negative `p`.
    ///
    /// `limit` can only shrink the search below [`Self::search_bound`].
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NoSolutionFound`] if no `p` up to the effective
    /// bound yields an integer `q`.
    pub fn find_sample(&self, limit: Option<u64>) -> SolveResult<PellSolution> {
        let mut bound = self.search_bound();
        if let Some(limit) = limit.map(Integer::from) {
            if limit < bound {
                bound = limit;
            }
        }

        let two = Integer::new(2);
        let mut p = Integer::zero();
        while p <= bound {
            let difference = &(&p * &p) - &self.constant;
            if !difference.is_negative() {
                if let Some(q) = difference.div_exact(&two).and_then(|half| half.exact_sqrt()) {
                    return Ok(PellSolution::new(p, q));
                }
            }
            p = p + Integer::new(1);
        }

        warn!(equation = %self, %bound, "pell search exhausted");
        Err(SolveError::NoSolutionFound {
            equation: self.to_string(),
            limit: bound.to_string(),
        })
    }
}

impl fmt::Display for PellEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p^2 - 2q^2 = {}", self.constant)
    }
}

/// The representative solutions the triple construction starts from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PellSamples {
    /// `(a, b)` with `a² − 2b² = 2z + 1`.
    pub ab: PellSolution,
    /// `(u, v)` with `u² − 2v² = −2`.
    pub uv: PellSolution,
}

/// Finds one sample for each of the two equations attached to `z`.
///
/// # Errors
///
/// Returns [`SolveError::NoSolutionFound`] if either equation has no sample
/// within the search bound. `2z + 1` has no representation whenever it is
/// divisible by an odd power of a prime `≡ ±3 (mod 8)`, e.g. `z = 1` or `z = 16`.
pub fn find_samples(z: u64, limit: Option<u64>) -> SolveResult<PellSamples> {
    let ab = PellEquation::for_z(z).find_sample(limit)?;
    let uv = PellEquation::negative_two().find_sample(limit)?;
    info!(z, %ab, %uv, "found pell samples");
    Ok(PellSamples { ab, uv })
}
