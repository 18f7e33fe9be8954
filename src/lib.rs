//! # A tableau simplex solver
//!
//! Linear programs with inequality constraints are solved exactly, using the two phase simplex
//! method on an explicit tableau of integers. Pivots are fraction-free, so all entries stay
//! integral without ever dividing.
//!
//! Two kinds of tableau are supported: a continuous one optimizing over the non-negative rationals,
//! and an all-integer one that replaces each pivot on a value other than one by a pivot on a cut.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
