//! # dioptra
//!
//! Explores a family of quadratic Diophantine equations and the integer
//! triples built from them through the Pell equation `u² − 2v² = −2`.
//!
//! ## Pipeline
//!
//! 1. Enumerate `(x, y)` with `x² + 2z·y² = 512·n·z²`, `x ≡ 0` and
//!    `y ≡ 16z (mod 32z)` for `n = 1..=max_n`
//! 2. Find samples of `a² − 2b² = 2z + 1` and `u² − 2v² = −2`
//! 3. Walk `(u_k, v_k)` through `[[3, 4], [2, 3]]` and map every record
//!    to a triple per step
//!
//! ## Quick Start
//!
//! ```rust
//! use dioptra::prelude::*;
//!
//! let params = SolveParams::builder().z(3).max_n(20).iterations(3).build().unwrap();
//! let config = PipelineConfig::new(params).with_halving(HalvingMode::Exact);
//! let table = run_pipeline(&config).unwrap();
//! println!("{}", dioptra::render::render_table(&table));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use dioptra_integers as integers;
pub use dioptra_linalg as linalg;
pub use dioptra_solve as solve;
pub use dioptra_triples as triples;

pub mod render;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use dioptra_integers::{Integer, Rational};
    pub use dioptra_solve::{
        enumerate_solutions, find_samples, ParallelConfig, PellEquation, PellSamples,
        QuadraticForm, SolutionRecord, SolveError, SolveParams,
    };
    pub use dioptra_triples::{
        run_pipeline, run_with_consumer, Cell, HalvingMode, PellState, PipelineConfig,
        PipelineError, ResultTable, Triple, TripleRecurrenceEngine,
    };
}
