//! Errors raised by the triple construction and the pipeline around it.

use dioptra_solve::SolveError;
use thiserror::Error;

/// Errors from the recurrence engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TripleError {
    /// A division by two that the construction requires to be exact was not.
    #[error(
        "arithmetic invariant violated at record {record}, iteration {iteration}: \
         {component} numerator {numerator} is odd"
    )]
    ArithmeticInvariantViolation {
        /// Position of the record in the solution table.
        record: usize,
        /// Recurrence iteration.
        iteration: usize,
        /// Which of `X`, `Y`, `Z` failed.
        component: &'static str,
        /// The numerator that should have been even.
        numerator: String,
    },

    /// A supplied Pell sample does not solve its equation.
    #[error("pell sample {sample} does not solve {equation}")]
    InvalidSample {
        /// The offending pair.
        sample: String,
        /// The equation it was supposed to solve.
        equation: String,
    },
}

/// Errors while loading or saving a pipeline configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the file failed.
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for this configuration.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The parameters are out of range.
    #[error(transparent)]
    Invalid(#[from] SolveError),
}

/// Any failure of a full pipeline run.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// Parameter validation or the Pell search failed.
    #[error(transparent)]
    Solve(#[from] SolveError),

    /// The recurrence engine rejected its input.
    #[error(transparent)]
    Triple(#[from] TripleError),
}
