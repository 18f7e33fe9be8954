//! # Phase one: finding a basic feasible solution
//!
//! Rows with a surplus column (a `-1` in the slack zone) have no initial basic column. Each of them
//! gets an artificial variable, and an auxiliary objective drives the sum of the artificial
//! variables to zero. Afterwards, the artificial variables are removed from the basis and the
//! original objective is expressed in terms of the basis that was found.
use log::{debug, info};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::algorithm::{SolveError, SolverConfig};
use crate::algorithm::two_phase::{LoopOutcome, Observer, Phase, Run, StoppingCondition};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::kind::{Kind, PreparedPivot};
use crate::algorithm::two_phase::tableau::{Pivot, Tableau};
use crate::data::linear_program::elements::ColumnRole;

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
///
/// If the problem is feasible, it can either have full rank, or be rank deficient.
#[derive(Debug, Eq, PartialEq)]
pub enum Feasibility {
    /// The tableau is in a basic feasible state, with the original objective.
    Feasible(Rank),
    /// The problem is not feasible.
    Infeasible,
}

/// A matrix or linear program either has full rank, or be rank deficient.
#[derive(Debug, Eq, PartialEq)]
pub enum Rank {
    /// No rows were removed.
    Full,
    /// The `Vec<usize>` is sorted and contains the indices of the rows that were removed, as they
    /// were numbered before any removal.
    Deficient(Vec<usize>),
}

/// Run the first phase, if it is needed.
///
/// # Return value
///
/// Whether the problem is feasible. If so, the tableau has a basis without artificial variables
/// and the original objective row, expressed in that basis.
///
/// # Errors
///
/// When a limit is reached.
pub(crate) fn primal<K, PR, O>(
    tableau: &mut Tableau<K>,
    run: &mut Run<'_, O>,
) -> Result<Feasibility, SolveError>
where
    K: Kind,
    PR: PivotRule,
    O: Observer<K>,
{
    let artificial_rows = introduce_artificial_variables(tableau);
    if artificial_rows.is_empty() {
        debug!("All constraints have a slack in the basis, skipping phase one");
        return Ok(Feasibility::Feasible(Rank::Full));
    }
    info!("Phase one with artificial variables for rows {artificial_rows:?}");

    let auxiliary = auxiliary_objective(tableau, &artificial_rows);
    let objective = tableau.replace_objective_row(auxiliary);

    let outcome = super::primal::<K, PR, O>(tableau, run, Phase::One, StoppingCondition::Feasible)?;
    if outcome == LoopOutcome::Unbounded || !tableau.right_hand_side(0).is_zero() {
        return Ok(Feasibility::Infeasible);
    }

    let removed = remove_artificial_basis_variables(tableau, run.config)?;
    retire_artificial_variables(tableau);
    restore_objective(tableau, objective);
    info!("Phase one done after {} iterations", run.iterations);

    Ok(Feasibility::Feasible(if removed.is_empty() { Rank::Full } else { Rank::Deficient(removed) }))
}

/// Give each row with a surplus column its own artificial variable.
///
/// The artificial column has a `1` in its row and zeros elsewhere. It becomes the basic column of
/// that row.
///
/// # Return value
///
/// Indices of the rows that received an artificial variable, in increasing order.
pub(crate) fn introduce_artificial_variables<K: Kind>(tableau: &mut Tableau<K>) -> Vec<usize> {
    let minus_one = -BigInt::one();
    let mut rows = Vec::new();
    for i in 1..tableau.nr_rows() {
        for j in tableau.nr_structural()..tableau.nr_decision_columns() {
            if tableau.get(i, j) == &minus_one {
                rows.push(i);
            }
        }
    }

    for &row in &rows {
        let column = tableau.insert_column(ColumnRole::Artificial, Some((row, BigInt::one())));
        tableau.set_basic_column(row, column);
    }

    rows
}

/// Sum of the rows with an artificial variable, excluding the artificial columns.
///
/// The right-hand side is summed as well: it is the negated sum of the artificial variables in the
/// initial basic solution.
pub(crate) fn auxiliary_objective<K: Kind>(tableau: &Tableau<K>, artificial_rows: &[usize]) -> Vec<BigInt> {
    let mut row = vec![BigInt::zero(); tableau.nr_columns()];
    for &i in artificial_rows {
        for (total, value) in row.iter_mut().zip(tableau.row(i)) {
            *total += value;
        }
    }
    for (total, role) in row.iter_mut().zip(tableau.roles()) {
        if *role == ColumnRole::Artificial {
            *total = BigInt::zero();
        }
    }
    K::mark_auxiliary_objective(&mut row);

    row
}

/// Removes all artificial variables from the basis by making a basis change "at zero level", or
/// without change of cost of the current solution.
///
/// When no entry of the row can be pivoted on directly, the row is reduced until one can: it is
/// divided by the greatest common divisor of its non-artificial entries, and cuts are pivoted in on
/// its smallest entry. Each cut leaves the remainders of the row entries, so this ends with a unit
/// entry.
///
/// # Return value
///
/// A `Vec` with indices of rows that are redundant and were removed, sorted.
///
/// # Errors
///
/// When the cut limit is reached while reducing a row.
fn remove_artificial_basis_variables<K: Kind>(
    tableau: &mut Tableau<K>,
    config: &SolverConfig,
) -> Result<Vec<usize>, SolveError> {
    let mut removed = Vec::new();

    let mut row = 1;
    while row < tableau.nr_rows() {
        let is_artificial = tableau.basic_column(row)
            .is_some_and(|j| tableau.role(j) == ColumnRole::Artificial);
        if !is_artificial {
            row += 1;
            continue;
        }

        let candidates = (0..tableau.nr_decision_columns())
            .filter(|&j| tableau.role(j) != ColumnRole::Artificial && !tableau.is_in_basis(j))
            .filter(|&j| !tableau.get(row, j).is_zero())
            .collect::<Vec<_>>();

        if candidates.is_empty() {
            debug!("Row {row} is redundant, removing it");
            removed.push(row + removed.len());
            tableau.remove_row(row);
        } else if let Some(&column) = candidates.iter().find(|&&j| K::can_drive_out_with(tableau.get(row, j))) {
            if tableau.get(row, column).is_negative() {
                tableau.negate_row(row);
            }
            debug!("Artificial variable leaves row {row}, column {column} enters");
            tableau.pivot(Pivot { row, column });
            row += 1;
        } else {
            reduce_artificial_row(tableau, row, &candidates, config)?;
        }
    }

    Ok(removed)
}

/// Bring the entries of a row with a basic artificial variable closer to a unit entry.
///
/// # Arguments
///
/// * `row`: Row at zero level with an artificial basic variable.
/// * `candidates`: The nonbasic, non-artificial columns with a nonzero entry in this row.
fn reduce_artificial_row<K: Kind>(
    tableau: &mut Tableau<K>,
    row: usize,
    candidates: &[usize],
    config: &SolverConfig,
) -> Result<(), SolveError> {
    let divisor = candidates.iter()
        .fold(BigInt::zero(), |divisor, &j| divisor.gcd(tableau.get(row, j)));
    if !divisor.is_one() {
        debug!("Dividing row {row} by {divisor}");
        tableau.divide_row(row, &divisor);
    }

    let Some(&column) = candidates.iter().min_by_key(|&&j| tableau.get(row, j).abs()) else {
        return Ok(());
    };
    if tableau.get(row, column).is_negative() {
        tableau.negate_row(row);
    }
    let PreparedPivot { pivot, .. } = K::prepare_pivot(tableau, Pivot { row, column }, config)?;
    debug!("Reducing row {row} on column {column}, pivoting in row {}", pivot.row);
    tableau.pivot(pivot);

    Ok(())
}

/// Zero all artificial columns so they can't enter the basis again.
fn retire_artificial_variables<K: Kind>(tableau: &mut Tableau<K>) {
    debug_assert!((1..tableau.nr_rows()).all(|i| {
        tableau.basic_column(i).is_none_or(|j| tableau.role(j) != ColumnRole::Artificial)
    }));

    for j in 0..tableau.nr_decision_columns() {
        if tableau.role(j) == ColumnRole::Artificial {
            tableau.clear_column(j);
        }
    }
}

/// Put the original objective row back and express it in the current basis.
///
/// # Arguments
///
/// * `tableau`: Tableau in a basic feasible state, without artificial variables in the basis.
/// * `objective`: Objective row as it was before phase one, possibly shorter than the current rows.
fn restore_objective<K: Kind>(tableau: &mut Tableau<K>, objective: Vec<BigInt>) {
    tableau.replace_objective_row(objective);

    for row in 1..tableau.nr_rows() {
        if let Some(column) = tableau.basic_column(row) {
            tableau.eliminate_from_objective(Pivot { row, column });
        }
    }
}
