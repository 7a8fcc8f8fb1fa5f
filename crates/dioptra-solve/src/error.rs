//! Errors raised while validating parameters or searching for solutions.

use thiserror::Error;

/// Errors that can occur before or during a Diophantine search.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    /// A parameter is outside its admissible range.
    #[error("invalid parameter `{name}`: {value} (must be at least 1)")]
    InvalidParameter {
        /// Parameter name as it appears in configuration.
        name: &'static str,
        /// The rejected value.
        value: u64,
    },

    /// The bounded search ended without finding a solution.
    #[error("no solution found for {equation} with search bound {limit}")]
    NoSolutionFound {
        /// Human-readable form of the equation, e.g. `p^2 - 2q^2 = 7`.
        equation: String,
        /// The largest `p` that was tried.
        limit: String,
    },
}

/// Result type for solver operations.
pub type SolveResult<T> = Result<T, SolveError>;
