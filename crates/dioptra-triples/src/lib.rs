//! # dioptra-triples
//!
//! Construction of triples from quadratic-form solutions and Pell samples.
//!
//! This crate provides:
//! - **Recurrence engine**: walks `(u_k, v_k)` through the automorphism
//!   `[[3, 4], [2, 3]]` and maps every record to a triple per state
//! - **Result table**: records plus ordered, labelled columns of cells
//! - **Pipeline**: validation, Pell search, sweep and recurrence in one call
//! - **Configuration**: TOML-backed [`PipelineConfig`]
//!
//! # Example
//!
//! ```
//! use dioptra_solve::SolveParams;
//! use dioptra_triples::{run_pipeline, HalvingMode, PipelineConfig};
//!
//! let params = SolveParams::builder().z(3).max_n(12).iterations(2).build().unwrap();
//! let config = PipelineConfig::new(params).with_halving(HalvingMode::Exact);
//! let table = run_pipeline(&config).unwrap();
//! assert_eq!(table.columns().len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod pipeline;
pub mod recurrence;
pub mod table;

#[cfg(test)]
mod proptests;

pub use config::PipelineConfig;
pub use error::{ConfigError, PipelineError, TripleError};
pub use pipeline::{run_pipeline, run_with_consumer};
pub use recurrence::{automorphism, HalvingMode, PellState, PellStates, TripleRecurrenceEngine};
pub use table::{Cell, RecurrenceColumn, ResultTable, Triple};
