//! The matrix-driven recurrence that turns solution records into triples.
//!
//! Starting from a solution `(u, v)` of `u² − 2v² = −2`, repeated
//! multiplication by the automorphism
//!
//! ```text
//! T = | 3 4 |
//!     | 2 3 |
//! ```
//!
//! walks the whole orbit of that solution, since `Tᵗ·diag(1, −2)·T = diag(1, −2)`.
//! Each state, combined with a fixed sample `(a, b)` of `a² − 2b² = 2z + 1`,
//! maps every record `(x, y, n)` to one triple.

use std::fmt;

use dioptra_integers::{Integer, Rational};
use dioptra_linalg::DenseMatrix;
use dioptra_solve::{ParallelConfig, PellEquation, PellSamples, PellSolution, SolutionRecord};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TripleError;
use crate::table::{Cell, RecurrenceColumn, ResultTable, Triple};

/// A recurrence state `(u_k, v_k)`; also the label of column `k`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PellState {
    /// First component.
    pub u: Integer,
    /// Second component.
    pub v: Integer,
}

impl PellState {
    /// Creates a state.
    #[must_use]
    pub fn new(u: Integer, v: Integer) -> Self {
        Self { u, v }
    }

    /// Creates a state from machine integers.
    #[must_use]
    pub fn from_i64(u: i64, v: i64) -> Self {
        Self::new(Integer::new(u), Integer::new(v))
    }

    /// Applies the 2×2 `matrix` to `(u, v)`.
    ///
    /// # Panics
    ///
    /// Panics if `matrix` is not 2×2.
    #[must_use]
    pub fn step(&self, matrix: &DenseMatrix) -> Self {
        assert_eq!(
            (matrix.num_rows(), matrix.num_cols()),
            (2, 2),
            "recurrence matrix must be 2x2"
        );
        Self {
            u: &matrix[(0, 0)] * &self.u + &matrix[(0, 1)] * &self.v,
            v: &matrix[(1, 0)] * &self.u + &matrix[(1, 1)] * &self.v,
        }
    }
}

impl From<PellSolution> for PellState {
    fn from(solution: PellSolution) -> Self {
        Self::new(solution.p, solution.q)
    }
}

impl fmt::Display for PellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.u, self.v)
    }
}

/// The automorphism `[[3, 4], [2, 3]]` of `u² − 2v²`.
#[must_use]
pub fn automorphism() -> DenseMatrix {
    DenseMatrix::from_i64_rows(&[&[3, 4], &[2, 3]])
}

/// Endless iterator over `T^k · (u_0, v_0)`, starting with `k = 0`.
#[derive(Clone, Debug)]
pub struct PellStates {
    matrix: DenseMatrix,
    next: PellState,
}

impl PellStates {
    /// Starts the orbit at `start`.
    #[must_use]
    pub fn new(start: PellState) -> Self {
        Self {
            matrix: automorphism(),
            next: start,
        }
    }
}

impl Iterator for PellStates {
    type Item = PellState;

    fn next(&mut self) -> Option<Self::Item> {
        let advanced = self.next.step(&self.matrix);
        Some(std::mem::replace(&mut self.next, advanced))
    }
}

/// How the three divisions by two in the triple formulas are treated.
///
/// With genuine samples `a` is odd, `u_k` even and `v_k` odd, so
/// `(2y_k + 1)(b·u_k + a·v_k)` is odd and `X`, `Y` come out as
/// half-integers. `Strict` reports that as an invariant violation;
/// `Exact` keeps the exact half-integer values. Neither truncates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HalvingMode {
    /// A non-exact halving is an [`TripleError::ArithmeticInvariantViolation`].
    #[default]
    Strict,
    /// Components are kept as exact rationals.
    Exact,
}

/// Builds recurrence columns from solution records and Pell samples.
#[derive(Clone, Debug)]
pub struct TripleRecurrenceEngine {
    modulus: Integer,
    y_residue: Integer,
    a: Integer,
    b: Integer,
    start: PellState,
    halving: HalvingMode,
    parallel: ParallelConfig,
}

impl TripleRecurrenceEngine {
    /// Creates an engine for parameter `z`.
    ///
    /// # Errors
    ///
    /// Returns [`TripleError::InvalidSample`] if `samples.ab` does not solve
    /// `a² − 2b² = 2z + 1` or `samples.uv` does not solve `u² − 2v² = −2`.
    pub fn new(z: u64, samples: &PellSamples) -> Result<Self, TripleError> {
        let checks = [
            (PellEquation::for_z(z), &samples.ab),
            (PellEquation::negative_two(), &samples.uv),
        ];
        for (equation, sample) in checks {
            if !equation.is_solution(&sample.p, &sample.q) {
                return Err(TripleError::InvalidSample {
                    sample: sample.to_string(),
                    equation: equation.to_string(),
                });
            }
        }

        let z = Integer::from(z);
        Ok(Self {
            modulus: &Integer::new(32) * &z,
            y_residue: &Integer::new(16) * &z,
            a: samples.ab.p.clone(),
            b: samples.ab.q.clone(),
            start: samples.uv.clone().into(),
            halving: HalvingMode::default(),
            parallel: ParallelConfig::default(),
        })
    }

    /// Sets the halving policy.
    #[must_use]
    pub fn with_halving(mut self, halving: HalvingMode) -> Self {
        self.halving = halving;
        self
    }

    /// Sets the parallel execution settings.
    #[must_use]
    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns the first `iterations` recurrence states.
    #[must_use]
    pub fn states(&self, iterations: usize) -> Vec<PellState> {
        PellStates::new(self.start.clone()).take(iterations).collect()
    }

    /// Computes the cell for one record under one state.
    ///
    /// `record_index` and `iteration` only label a violation.
    ///
    /// # Errors
    ///
    /// Returns [`TripleError::ArithmeticInvariantViolation`] under
    /// [`HalvingMode::Strict`] when a numerator is odd.
    pub fn cell_for(
        &self,
        record: &SolutionRecord,
        state: &PellState,
        record_index: usize,
        iteration: usize,
    ) -> Result<Cell, TripleError> {
        let Some(x_k) = record.x.div_exact(&self.modulus) else {
            return Ok(Cell::Absent);
        };
        let Some(y_k) = (&record.y - &self.y_residue).div_exact(&self.modulus) else {
            return Ok(Cell::Absent);
        };

        let odd = Integer::new(2) * y_k + Integer::new(1);
        let term1 = &odd * &(&self.b * &state.u + &self.a * &state.v);
        let term2 = Integer::new(2) * x_k;
        let z_numerator =
            &odd * &(&self.a * &state.u + Integer::new(2) * &self.b * &state.v);

        let halve = |component: &'static str, numerator: Integer| match self.halving {
            HalvingMode::Exact => Ok(Rational::half_of(numerator)),
            HalvingMode::Strict if numerator.is_even() => Ok(Rational::half_of(numerator)),
            HalvingMode::Strict => Err(TripleError::ArithmeticInvariantViolation {
                record: record_index,
                iteration,
                component,
                numerator: numerator.to_string(),
            }),
        };

        let x = halve("X", &term1 + &term2)?;
        let y = halve("Y", &term1 - &term2)?;
        let z = halve("Z", z_numerator)?;
        Ok(Cell::Triple(Triple::new(x, y, z)))
    }

    /// Computes one column for `state`.
    ///
    /// Records are independent; above the configured threshold they are
    /// mapped on the rayon pool. The reported violation is always the one
    /// with the lowest record index.
    ///
    /// # Errors
    ///
    /// Propagates the first [`TripleError`] by record position.
    pub fn column(
        &self,
        records: &[SolutionRecord],
        state: &PellState,
        iteration: usize,
    ) -> Result<RecurrenceColumn, TripleError> {
        let compute = |(i, record): (usize, &SolutionRecord)| {
            self.cell_for(record, state, i, iteration)
        };

        let results: Vec<Result<Cell, TripleError>> =
            if self.parallel.should_parallelize(records.len()) {
                records.par_iter().enumerate().map(compute).collect()
            } else {
                records.iter().enumerate().map(compute).collect()
            };

        let cells = results.into_iter().collect::<Result<Vec<_>, _>>()?;
        Ok(RecurrenceColumn {
            label: state.clone(),
            cells,
        })
    }

    /// Produces the full table: `iterations` columns over `records`.
    ///
    /// # Errors
    ///
    /// Propagates the first [`TripleError`] in iteration order.
    pub fn run(
        &self,
        records: Vec<SolutionRecord>,
        iterations: usize,
    ) -> Result<ResultTable, TripleError> {
        let mut columns = Vec::with_capacity(iterations);
        for (k, state) in self.states(iterations).into_iter().enumerate() {
            let column = self.column(&records, &state, k)?;
            debug!(
                iteration = k,
                label = %column.label,
                absent = column.cells.iter().filter(|c| c.is_absent()).count(),
                "built recurrence column"
            );
            columns.push(column);
        }
        Ok(ResultTable::new(records, columns))
    }
}
