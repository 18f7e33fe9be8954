//! # Standard form
//!
//! A tableau in standard form has one slack or surplus column per constraint row, which turns
//! every inequality into an equality. Rows with a slack can use it as their initial basic column.
//! Rows with a surplus need an artificial variable before the simplex method can start.
use log::debug;
use num_traits::Signed;

use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::elements::{ColumnRole, ConstraintRelation};
use crate::io::error::InconsistencyError;

/// Make all right-hand sides non-negative.
///
/// Rows with a negative right-hand side are multiplied by `-1` and their relation is flipped.
///
/// # Arguments
///
/// * `tableau`: Tableau without slack columns.
/// * `relations`: One relation per constraint row, in row order.
pub fn normalize_right_hand_sides<K: Kind>(
    tableau: &mut Tableau<K>,
    relations: &mut [ConstraintRelation],
) {
    debug_assert_eq!(relations.len(), tableau.nr_constraints());

    for (i, relation) in relations.iter_mut().enumerate() {
        let row = i + 1;
        if tableau.right_hand_side(row).is_negative() {
            tableau.negate_row(row);
            *relation = !*relation;
            debug!("Negated row {row}, relation is now {relation}");
        }
    }
}

/// Add a slack or surplus column for every constraint row.
///
/// Each column is inserted right before the bookkeeping columns. It has a `1` in its row for `<=`
/// constraints, a `-1` for `>=` constraints, and zeros elsewhere. A slack becomes the basic column
/// of its row.
///
/// # Errors
///
/// When the number of relations doesn't match the number of constraint rows.
pub fn standardize<K: Kind>(
    tableau: &mut Tableau<K>,
    relations: &[ConstraintRelation],
) -> Result<(), InconsistencyError> {
    if relations.len() != tableau.nr_constraints() {
        return Err(InconsistencyError::new(format!(
            "{} relations for {} constraints",
            relations.len(),
            tableau.nr_constraints(),
        )));
    }

    for (i, &relation) in relations.iter().enumerate() {
        let row = i + 1;
        let column = tableau.insert_column(ColumnRole::Slack, Some((row, relation.slack_coefficient())));
        if relation == ConstraintRelation::Less {
            tableau.set_basic_column(row, column);
        }
    }

    Ok(())
}
