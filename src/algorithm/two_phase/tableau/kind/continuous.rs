//! # Continuous tableaus
//!
//! Next to the right-hand side, the tableau carries a column `z` for the objective function value.
//! The pivot transform scales that column along with the others, so the value is read as `b / z`.
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::algorithm::{SolveError, SolverConfig};
use crate::algorithm::two_phase::tableau::{Pivot, Tableau};
use crate::algorithm::two_phase::tableau::kind::{Kind, PreparedPivot};
use crate::data::linear_program::elements::ColumnRole;

/// Optimize over non-negative rationals.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Continuous;

impl Kind for Continuous {
    const BOOKKEEPING: &'static [ColumnRole] = &[ColumnRole::ObjectiveValue, ColumnRole::RightHandSide];
    const PIVOT_MARKERS: (char, char) = ('[', ']');
    const NAME: &'static str = "continuous";

    fn objective_row(cost: &[BigInt]) -> Vec<BigInt> {
        cost.iter().cloned()
            .chain([-BigInt::one(), BigInt::zero()])
            .collect()
    }

    fn constraint_row(coefficients: &[BigInt], right_hand_side: &BigInt) -> Vec<BigInt> {
        coefficients.iter().cloned()
            .chain([BigInt::zero(), right_hand_side.clone()])
            .collect()
    }

    fn objective_function_value(objective_row: &[BigInt]) -> BigRational {
        let n = objective_row.len();
        debug_assert!(n >= 2);
        debug_assert!(!objective_row[n - 2].is_zero());

        BigRational::new(objective_row[n - 1].clone(), objective_row[n - 2].clone())
    }

    fn mark_auxiliary_objective(row: &mut [BigInt]) {
        let n = row.len();
        row[n - 2] = -BigInt::one();
    }

    fn can_drive_out_with(value: &BigInt) -> bool {
        !value.is_zero()
    }

    fn prepare_pivot(
        _tableau: &mut Tableau<Self>,
        pivot: Pivot,
        _config: &SolverConfig,
    ) -> Result<PreparedPivot, SolveError> {
        Ok(PreparedPivot { pivot, pseudo_pivot: None })
    }
}
