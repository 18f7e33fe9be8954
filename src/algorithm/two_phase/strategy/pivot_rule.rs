//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use num_traits::Signed;

use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::tableau::Tableau;

/// Outcome of a search for an entering column.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColumnSelection {
    /// This column should enter the basis.
    Entering(usize),
    /// No column has a positive objective coefficient.
    Optimal,
    /// Columns with a positive objective coefficient exist, but none has a positive entry in any
    /// constraint row.
    Unbounded {
        /// The first of those columns.
        column: usize,
    },
}

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made independent
/// of the strategy, using the minimum ratio test of the tableau.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    fn select_primal_pivot_column<K: Kind>(&mut self, tableau: &Tableau<K>) -> ColumnSelection;
}

/// Simply pivot on the first column which has a positive objective coefficient, and a positive
/// entry in at least one constraint row.
pub struct FirstProfitable;

impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<K: Kind>(&mut self, tableau: &Tableau<K>) -> ColumnSelection {
        let objective = tableau.objective_row();
        let mut profitable = (0..tableau.nr_decision_columns())
            .filter(|&j| objective[j].is_positive())
            .peekable();

        match profitable.peek().copied() {
            None => ColumnSelection::Optimal,
            Some(first) => profitable
                .find(|&j| !tableau.is_column_nonpositive(j))
                .map_or(ColumnSelection::Unbounded { column: first }, ColumnSelection::Entering),
        }
    }
}
