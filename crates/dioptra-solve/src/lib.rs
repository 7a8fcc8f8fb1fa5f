//! Bounded Diophantine searches for dioptra.
//!
//! This crate replaces generic symbolic solving with explicit, provably
//! complete searches over exact integers:
//!
//! - **Quadratic form**: all `(x, y)` with `x² + 2z·y² = 512·n·z²`,
//!   `x ≡ 0` and `y ≡ 16z (mod 32z)`, swept over `n = 1..=max_n`
//! - **Pell samples**: one solution each of `a² − 2b² = 2z + 1` and
//!   `u² − 2v² = −2`
//!
//! # Example
//!
//! ```
//! use dioptra_solve::{enumerate_solutions, find_samples, SolveParams};
//!
//! let params = SolveParams::builder().z(3).max_n(20).build().unwrap();
//! let records = enumerate_solutions(&params);
//! assert!(records.iter().all(|r| r.n >= 3));
//!
//! let samples = find_samples(params.z, None).unwrap();
//! assert_eq!(samples.ab.p.to_i64(), Some(3));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod params;
pub mod pell;
pub mod quadratic;

#[cfg(test)]
mod proptests;

pub use error::{SolveError, SolveResult};
pub use params::{ParallelConfig, SolveParams, SolveParamsBuilder};
pub use pell::{find_samples, PellEquation, PellSamples, PellSolution};
pub use quadratic::{enumerate_solutions, QuadraticForm, SolutionRecord};
