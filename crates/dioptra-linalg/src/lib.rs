//! # dioptra-linalg
//!
//! Exact dense linear algebra over the integers for dioptra.
//!
//! Provides row-major dense integer matrices. Linear recurrences such as
//! the Pell automorphism `[[3, 4], [2, 3]]` are stored here and applied
//! entry by entry.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;

pub use dense_matrix::DenseMatrix;

#[cfg(test)]
mod tests;
