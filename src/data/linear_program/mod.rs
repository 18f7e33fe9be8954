//! # Representing linear programs
//!
//! This module contains different representations of linear programs. A `Problem` holds the
//! inequalities as they were read, the standard form adds a slack column per constraint to the
//! tableau of such a problem.
pub mod elements;
pub mod problem;
pub mod solution;
pub mod standard_form;
