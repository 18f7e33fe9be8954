//! # Strategies
//!
//! Decisions that can be made in different ways while solving, such as which column to bring into
//! the basis.
pub mod pivot_rule;
