//! # dioptra-integers
//!
//! Exact integer and rational arithmetic for dioptra.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`) with exact square roots
//!   and checked division
//! - Arbitrary precision rationals (`Rational`)
//!
//! Quadratic-form residues such as `512·n·z²` outgrow machine words quickly,
//! so every search in the workspace runs on these types.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
