//! # Algorithms
use thiserror::Error;

use crate::algorithm::two_phase::strategy::pivot_rule::FirstProfitable;
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::{Observer, Silent};
use crate::data::linear_program::problem::Problem;
use crate::data::linear_program::solution::Solution;
use crate::io::error::InconsistencyError;

pub mod two_phase;
pub mod utilities;

/// A problem that can be solved with a tableau of kind `K`.
///
/// The kind decides the domain: `Continuous` optimizes over the rationals, `AllInteger` over the
/// integers.
pub trait Solve {
    /// Solve this problem.
    ///
    /// # Return value
    ///
    /// Whether the problem is feasible, and if so, a solution if the problem is bounded.
    ///
    /// # Errors
    ///
    /// When one of the limits in the configuration is reached.
    fn solve<K: Kind>(&self, config: &SolverConfig) -> Result<OptimizationResult<K>, SolveError> {
        self.solve_observed(config, &mut Silent)
    }

    /// Solve this problem, showing every step to an observer.
    ///
    /// # Errors
    ///
    /// When one of the limits in the configuration is reached.
    fn solve_observed<K: Kind, O: Observer<K>>(
        &self,
        config: &SolverConfig,
        observer: &mut O,
    ) -> Result<OptimizationResult<K>, SolveError>;
}

impl Solve for Problem {
    fn solve_observed<K: Kind, O: Observer<K>>(
        &self,
        config: &SolverConfig,
        observer: &mut O,
    ) -> Result<OptimizationResult<K>, SolveError> {
        two_phase::solve::<K, FirstProfitable, O>(self, config, observer)
    }
}

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm
#[allow(missing_docs)]
#[derive(Eq, PartialEq, Debug)]
pub enum OptimizationResult<K> {
    Infeasible,
    FiniteOptimum(Solution<K>),
    Unbounded,
}

/// Limits and options for a single solve.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SolverConfig {
    /// Maximum number of pivots over both phases, `None` for no limit.
    pub max_iterations: Option<usize>,
    /// Maximum number of cuts in the all-integer variant, `None` for no limit.
    pub max_cuts: Option<usize>,
    /// Divide the rows of the terminal tableau by their greatest common divisor.
    pub simplify_final: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: Some(10_000),
            max_cuts: Some(1_000),
            simplify_final: false,
        }
    }
}

/// The algorithm was stopped before it could decide on an `OptimizationResult`.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum SolveError {
    /// The configured maximum number of pivots was reached.
    #[error("no result after the maximum of {0} iterations")]
    IterationLimit(usize),
    /// The configured maximum number of cuts was reached.
    #[error("no result after the maximum of {0} cuts")]
    CutLimit(usize),
    /// The tableau and the constraint relations don't match.
    #[error(transparent)]
    Inconsistency(#[from] InconsistencyError),
}
