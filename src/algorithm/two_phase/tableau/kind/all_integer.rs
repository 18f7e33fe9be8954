//! # All-integer tableaus
//!
//! These tableaus have no `z` column: the objective row implicitly carries a coefficient of `-1`
//! for the objective function value. Pivots are only ever performed on a value of one, which keeps
//! that coefficient fixed and all basic solutions integral.
//!
//! When the pivot rules select a cell with any other value, a cut is derived from the pivot row
//! instead. Its coefficients are the pivot row divided by the pivot value, rounded down. It gets a
//! fresh slack column and a unit coefficient in the pivot column, so pivoting on it keeps the
//! tableau integral.
use log::debug;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::algorithm::{SolveError, SolverConfig};
use crate::algorithm::two_phase::tableau::{Pivot, Tableau};
use crate::algorithm::two_phase::tableau::kind::{Kind, PreparedPivot};
use crate::data::linear_program::elements::ColumnRole;

/// Optimize over non-negative integers.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct AllInteger;

impl Kind for AllInteger {
    const BOOKKEEPING: &'static [ColumnRole] = &[ColumnRole::RightHandSide];
    const PIVOT_MARKERS: (char, char) = ('(', ')');
    const NAME: &'static str = "all-integer";

    fn objective_row(cost: &[BigInt]) -> Vec<BigInt> {
        cost.iter().cloned().chain([BigInt::zero()]).collect()
    }

    fn constraint_row(coefficients: &[BigInt], right_hand_side: &BigInt) -> Vec<BigInt> {
        coefficients.iter().cloned().chain([right_hand_side.clone()]).collect()
    }

    fn objective_function_value(objective_row: &[BigInt]) -> BigRational {
        debug_assert!(!objective_row.is_empty());

        BigRational::from_integer(-&objective_row[objective_row.len() - 1])
    }

    fn mark_auxiliary_objective(_row: &mut [BigInt]) {}

    fn can_drive_out_with(value: &BigInt) -> bool {
        value.abs().is_one()
    }

    fn prepare_pivot(
        tableau: &mut Tableau<Self>,
        pivot: Pivot,
        config: &SolverConfig,
    ) -> Result<PreparedPivot, SolveError> {
        if tableau.get(pivot.row, pivot.column).is_one() {
            return Ok(PreparedPivot { pivot, pseudo_pivot: None });
        }

        if let Some(max_cuts) = config.max_cuts {
            if tableau.role_counts()[ColumnRole::Cut] >= max_cuts {
                return Err(SolveError::CutLimit(max_cuts));
            }
        }

        let row = insert_cut(tableau, pivot);
        Ok(PreparedPivot {
            pivot: Pivot { row, column: pivot.column },
            pseudo_pivot: Some(pivot),
        })
    }
}

/// Divide all values by the pivot value, rounding down.
///
/// # Arguments
///
/// * `row`: Row to derive a cut from, including the right-hand side.
/// * `pivot_value`: Strictly positive value to divide by.
pub fn cut_coefficients(row: &[BigInt], pivot_value: &BigInt) -> Vec<BigInt> {
    debug_assert!(pivot_value.is_positive());

    row.iter().map(|value| value.div_floor(pivot_value)).collect()
}

/// Add a cut derived from the pivot row to the tableau.
///
/// A new cut column is inserted before the right-hand side. The new row has a one in that column
/// and registers it as its basic column. The new row has a one in the pivot column as well.
///
/// # Return value
///
/// Index of the new row.
fn insert_cut(tableau: &mut Tableau<AllInteger>, pivot: Pivot) -> usize {
    let pivot_value = tableau.get(pivot.row, pivot.column).clone();

    let column = tableau.insert_column(ColumnRole::Cut, None);
    let mut cut = cut_coefficients(tableau.row(pivot.row), &pivot_value);
    cut[column] = BigInt::one();
    debug_assert!(cut[pivot.column].is_one());

    let row = tableau.push_row(cut, column);
    debug!("Cut from row {} on value {pivot_value}, added as row {row} with column {column}", pivot.row);

    row
}
