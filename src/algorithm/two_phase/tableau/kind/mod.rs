//! # Tableau types: continuous or all-integer
//!
//! The `Tableau` type and the algorithm logic in the parent modules don't depend on the number
//! domain that is being optimized over. The differences are in the bookkeeping columns, in how the
//! objective function value is read, and in which cells may be pivoted on. This module enables
//! those abstractions.
use std::fmt::Debug;

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::algorithm::{SolveError, SolverConfig};
use crate::algorithm::two_phase::tableau::{Pivot, Tableau};
use crate::data::linear_program::elements::ColumnRole;

pub mod all_integer;
pub mod continuous;

/// The pivot that will actually be performed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PreparedPivot {
    /// Cell to apply the pivot transform on.
    pub pivot: Pivot,
    /// Cell the pivot rules selected, when it was replaced by a pivot on a cut row.
    pub pseudo_pivot: Option<Pivot>,
}

/// The tableau kind determines the bookkeeping columns and the admissible pivots.
pub trait Kind: Copy + Clone + Debug + Default + Eq + PartialEq + 'static {
    /// Trailing columns that are never pivoted on, in order.
    ///
    /// The last one is always the right-hand side.
    const BOOKKEEPING: &'static [ColumnRole];
    /// Brackets around the pivot cell when displaying the tableau.
    const PIVOT_MARKERS: (char, char);
    /// Human-readable name.
    const NAME: &'static str;

    /// Build the objective row, including bookkeeping columns.
    ///
    /// # Arguments
    ///
    /// * `cost`: Cost coefficients of the maximization problem.
    fn objective_row(cost: &[BigInt]) -> Vec<BigInt>;

    /// Build a constraint row, including bookkeeping columns.
    fn constraint_row(coefficients: &[BigInt], right_hand_side: &BigInt) -> Vec<BigInt>;

    /// Read the objective function value from the objective row.
    fn objective_function_value(objective_row: &[BigInt]) -> BigRational;

    /// Finish a freshly computed phase one objective row.
    fn mark_auxiliary_objective(row: &mut [BigInt]);

    /// Whether an artificial variable may be driven out of the basis by pivoting on this value.
    ///
    /// The value is nonzero.
    fn can_drive_out_with(value: &BigInt) -> bool;

    /// Determine the pivot to perform, possibly modifying the tableau.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Tableau to pivot in.
    /// * `pivot`: Cell chosen by the pivot rules.
    /// * `config`: Limits to respect.
    ///
    /// # Return value
    ///
    /// The cell to apply the transform on, which might differ from the cell chosen.
    ///
    /// # Errors
    ///
    /// When a limit is reached.
    fn prepare_pivot(
        tableau: &mut Tableau<Self>,
        pivot: Pivot,
        config: &SolverConfig,
    ) -> Result<PreparedPivot, SolveError>;
}
