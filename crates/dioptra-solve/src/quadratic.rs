//! Bounded enumeration of `x² + 2z·y² = 512·n·z²`.
//!
//! Solutions are restricted to the congruence classes `x ≡ 0` and
//! `y ≡ 16z (mod 32z)`. Since `2z·y² ≤ 512·n·z²`, every solution has
//! `y ≤ sqrt(256·n·z)`, so stepping `y` through its residue class up to that
//! bound and testing the residual `512·n·z² − 2z·y²` for squareness finds
//! every solution with exact arithmetic.

use dioptra_integers::Integer;
use num_traits::Zero;
use rayon::prelude::*;
use tracing::debug;

use crate::params::SolveParams;

/// One accepted solution of the quadratic form, tagged with its `n`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SolutionRecord {
    /// Non-negative `x`, a multiple of `32z`.
    pub x: Integer,
    /// Non-negative `y`, congruent to `16z` modulo `32z`.
    pub y: Integer,
    /// The `n` whose right-hand side this pair satisfies.
    pub n: u64,
}

impl SolutionRecord {
    /// Creates a record.
    #[must_use]
    pub fn new(x: Integer, y: Integer, n: u64) -> Self {
        Self { x, y, n }
    }

    /// Creates a record from machine integers.
    #[must_use]
    pub fn from_i64(x: i64, y: i64, n: u64) -> Self {
        Self::new(Integer::new(x), Integer::new(y), n)
    }

    /// Returns true if this record solves `form` at its `n` and lies in the
    /// required congruence classes.
    #[must_use]
    pub fn satisfies(&self, form: &QuadraticForm) -> bool {
        !self.x.is_negative()
            && !self.y.is_negative()
            && form.is_solution(&self.x, &self.y, self.n)
            && form.in_congruence_classes(&self.x, &self.y)
    }
}

/// The quadratic form `x² + 2z·y²` together with its congruence data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuadraticForm {
    z: Integer,
    modulus: Integer,
    y_residue: Integer,
}

impl QuadraticForm {
    /// Creates the form for parameter `z`.
    #[must_use]
    pub fn new(z: u64) -> Self {
        let z = Integer::from(z);
        let modulus = &Integer::new(32) * &z;
        let y_residue = &Integer::new(16) * &z;
        Self {
            z,
            modulus,
            y_residue,
        }
    }

    /// Returns `z`.
    #[must_use]
    pub fn z(&self) -> &Integer {
        &self.z
    }

    /// Returns the congruence modulus `32z`.
    #[must_use]
    pub fn modulus(&self) -> &Integer {
        &self.modulus
    }

    /// Returns the residue `16z` required of `y`.
    #[must_use]
    pub fn y_residue(&self) -> &Integer {
        &self.y_residue
    }

    /// Right-hand side `512·n·z²`.
    #[must_use]
    pub fn rhs(&self, n: u64) -> Integer {
        Integer::new(512) * Integer::from(n) * &self.z * &self.z
    }

    /// Evaluates `x² + 2z·y²`.
    #[must_use]
    pub fn evaluate(&self, x: &Integer, y: &Integer) -> Integer {
        x * x + Integer::new(2) * &self.z * y * y
    }

    /// Returns true if `(x, y)` solves the equation for `n`.
    #[must_use]
    pub fn is_solution(&self, x: &Integer, y: &Integer, n: u64) -> bool {
        self.evaluate(x, y) == self.rhs(n)
    }

    /// Returns true if `x ≡ 0` and `y ≡ 16z (mod 32z)`.
    #[must_use]
    pub fn in_congruence_classes(&self, x: &Integer, y: &Integer) -> bool {
        x.rem_euclid(&self.modulus).is_zero() && y.rem_euclid(&self.modulus) == self.y_residue
    }

    /// Largest `y` that can appear in a solution for `n`: `isqrt(256·n·z)`.
    #[must_use]
    pub fn y_bound(&self, n: u64) -> Integer {
        let bound = Integer::new(256) * Integer::from(n) * &self.z;
        // 256·n·z is non-negative, so the root always exists
        bound.isqrt().unwrap_or_else(Integer::zero)
    }

    /// Returns the solutions for a single `n` in ascending `y`, stopping
    /// after `cap` pairs.
    ///
    /// Each `y` determines at most one non-negative `x`, so ascending `y`
    /// never produces the same pair twice.
    #[must_use]
    pub fn solutions_for(&self, n: u64, cap: usize) -> Vec<(Integer, Integer)> {
        let mut accepted = Vec::new();
        if cap == 0 || n == 0 {
            return accepted;
        }

        let rhs = self.rhs(n);
        let bound = self.y_bound(n);
        let two_z = Integer::new(2) * &self.z;
        let mut y = self.y_residue.clone();

        while y <= bound {
            let residual = &rhs - &(&two_z * &(&y * &y));
            if residual.is_negative() {
                break;
            }
            if let Some(x) = residual.exact_sqrt() {
                if x.rem_euclid(&self.modulus).is_zero() {
                    accepted.push((x, y.clone()));
                    if accepted.len() >= cap {
                        break;
                    }
                }
            }
            y = y + &self.modulus;
        }

        accepted
    }
}

/// Sweeps `n = 1..=max_n` and concatenates the tagged solutions in
/// ascending `n` order.
///
/// The per-`n` searches are independent; above the configured threshold
/// they run on the rayon pool. Output order does not depend on the mode.
#[must_use]
pub fn enumerate_solutions(params: &SolveParams) -> Vec<SolutionRecord> {
    let form = QuadraticForm::new(params.z);
    let cap = params.max_solutions_per_n;
    let ns = 1..=params.max_n;
    let len = usize::try_from(params.max_n).unwrap_or(usize::MAX);

    let solve_one = |n: u64| -> Vec<SolutionRecord> {
        let pairs = form.solutions_for(n, cap);
        debug!(n, count = pairs.len(), "enumerated quadratic form");
        pairs
            .into_iter()
            .map(|(x, y)| SolutionRecord::new(x, y, n))
            .collect()
    };

    let per_n: Vec<Vec<SolutionRecord>> = if params.parallel.should_parallelize(len) {
        ns.into_par_iter().map(solve_one).collect()
    } else {
        ns.map(solve_one).collect()
    };

    per_n.into_iter().flatten().collect()
}
