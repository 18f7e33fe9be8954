//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//!
//! The tableau is stored explicitly as a dense matrix of integers. Row `0` is the objective row,
//! the other rows are constraints. Columns can be inserted while solving (slacks, artificial
//! variables, cuts), always right before the trailing bookkeeping columns and always in all rows
//! at once.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::iter::{once, repeat, repeat_n};
use std::marker::PhantomData;

use enum_map::EnumMap;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::tableau::snapshot::Snapshot;
use crate::algorithm::utilities::is_all_negative_but_last;
use crate::data::linear_program::elements::{ColumnRole, Objective};
use crate::data::linear_program::problem::Problem;

pub mod kind;
pub mod snapshot;

/// A cell of the tableau to pivot on.
///
/// Only valid during a single iteration: every structural change to the tableau invalidates it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Pivot {
    /// Index of a constraint row, so at least `1`.
    pub row: usize,
    /// Index of a non-bookkeeping column.
    pub column: usize,
}

/// The simplex tableau.
///
/// All rows have the same length at all times.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tableau<K> {
    /// Objective row followed by the constraint rows.
    rows: Vec<Vec<BigInt>>,
    /// The role of each column, has the same length as each row.
    roles: Vec<ColumnRole>,
    /// Per constraint row (so index `i` describes row `i + 1`), the column that is basic in it.
    ///
    /// `None` for rows that don't have a basic column yet; only during standardization.
    basis: Vec<Option<usize>>,
    /// Number of variables of the original problem, fixed after creation.
    nr_structural: usize,

    kind: PhantomData<K>,
}

impl<K: Kind> Tableau<K> {
    /// Create a tableau for a problem, including the bookkeeping columns.
    ///
    /// Minimization problems are turned into maximization problems by negating the cost.
    pub fn new(problem: &Problem) -> Self {
        let cost = match problem.objective() {
            Objective::Maximize => problem.cost().to_vec(),
            Objective::Minimize => problem.cost().iter().map(|value| -value).collect(),
        };

        let rows = once(K::objective_row(&cost))
            .chain(problem.constraints().iter().map(|constraint| {
                K::constraint_row(&constraint.coefficients, &constraint.right_hand_side)
            }))
            .collect::<Vec<_>>();
        let roles = repeat_n(ColumnRole::Structural, problem.nr_variables())
            .chain(K::BOOKKEEPING.iter().copied())
            .collect();

        Self {
            basis: vec![None; rows.len() - 1],
            rows,
            roles,
            nr_structural: problem.nr_variables(),
            kind: PhantomData,
        }
    }

    /// Create a tableau from explicit rows.
    ///
    /// Rows should already contain the bookkeeping columns of the kind. Columns after the
    /// structural ones are read as slacks. A slack column that is positive in exactly one
    /// constraint row, and zero in the others, is taken as the basic column of that row.
    pub fn from_rows(rows: Vec<Vec<BigInt>>, nr_structural: usize) -> Self {
        debug_assert!(rows.len() > 1);
        debug_assert!(rows.iter().all(|row| row.len() == rows[0].len()));
        debug_assert!(nr_structural + K::BOOKKEEPING.len() <= rows[0].len());

        let nr_columns = rows[0].len();
        let nr_slack = nr_columns - nr_structural - K::BOOKKEEPING.len();
        let roles = repeat_n(ColumnRole::Structural, nr_structural)
            .chain(repeat(ColumnRole::Slack).take(nr_slack))
            .chain(K::BOOKKEEPING.iter().copied())
            .collect();
        let basis = (1..rows.len())
            .map(|i| (nr_structural..nr_structural + nr_slack).find(|&j| {
                rows[i][j].is_positive()
                    && (1..rows.len()).filter(|&k| k != i).all(|k| rows[k][j].is_zero())
            }))
            .collect();

        Self { rows, roles, basis, nr_structural, kind: PhantomData }
    }

    /// Number of rows, including the objective row.
    pub fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of constraint rows.
    pub fn nr_constraints(&self) -> usize {
        self.rows.len() - 1
    }

    /// Number of columns, including the bookkeeping columns.
    pub fn nr_columns(&self) -> usize {
        self.roles.len()
    }

    /// Number of columns that can be pivoted on: all but the bookkeeping columns.
    pub fn nr_decision_columns(&self) -> usize {
        self.nr_columns() - K::BOOKKEEPING.len()
    }

    /// Number of variables of the original problem.
    pub fn nr_structural(&self) -> usize {
        self.nr_structural
    }

    /// All rows, starting with the objective row.
    pub fn rows(&self) -> &[Vec<BigInt>] {
        &self.rows
    }

    /// A single row.
    pub fn row(&self, i: usize) -> &[BigInt] {
        debug_assert!(i < self.nr_rows());

        &self.rows[i]
    }

    /// The objective row, or the auxiliary objective during the first phase.
    pub fn objective_row(&self) -> &[BigInt] {
        &self.rows[0]
    }

    /// A single entry.
    pub fn get(&self, i: usize, j: usize) -> &BigInt {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns());

        &self.rows[i][j]
    }

    /// The `b` entry of a row.
    pub fn right_hand_side(&self, i: usize) -> &BigInt {
        &self.rows[i][self.nr_columns() - 1]
    }

    /// Role of each column.
    pub fn roles(&self) -> &[ColumnRole] {
        &self.roles
    }

    /// Role of a single column.
    pub fn role(&self, j: usize) -> ColumnRole {
        self.roles[j]
    }

    /// How many columns there are of each role.
    pub fn role_counts(&self) -> EnumMap<ColumnRole, usize> {
        let mut counts = EnumMap::default();
        for &role in &self.roles {
            counts[role] += 1;
        }
        counts
    }

    /// Number of artificial columns, whether they are still in use or not.
    pub fn nr_artificial_variables(&self) -> usize {
        self.role_counts()[ColumnRole::Artificial]
    }

    /// Column that is basic in constraint row `i`, if any.
    pub fn basic_column(&self, i: usize) -> Option<usize> {
        debug_assert!(i > 0 && i < self.nr_rows());

        self.basis[i - 1]
    }

    /// Whether a column is basic in some row.
    pub fn is_in_basis(&self, j: usize) -> bool {
        self.basis.contains(&Some(j))
    }

    /// Insert a column right before the bookkeeping columns.
    ///
    /// # Arguments
    ///
    /// * `role`: What the new column stands for.
    /// * `unit`: Row and value of the only nonzero entry, if any.
    ///
    /// # Return value
    ///
    /// Index of the new column.
    pub(crate) fn insert_column(&mut self, role: ColumnRole, unit: Option<(usize, BigInt)>) -> usize {
        debug_assert!(!role.is_bookkeeping());

        let column = self.nr_decision_columns();
        for (i, row) in self.rows.iter_mut().enumerate() {
            let value = match &unit {
                Some((unit_row, value)) if *unit_row == i => value.clone(),
                _ => BigInt::zero(),
            };
            row.insert(column, value);
        }
        self.roles.insert(column, role);
        // Basic columns at or after the insertion point shift
        for basic in self.basis.iter_mut().flatten() {
            if *basic >= column {
                *basic += 1;
            }
        }

        column
    }

    /// Append a constraint row.
    ///
    /// # Return value
    ///
    /// Index of the new row.
    pub(crate) fn push_row(&mut self, row: Vec<BigInt>, basic_column: usize) -> usize {
        debug_assert_eq!(row.len(), self.nr_columns());
        debug_assert!(basic_column < self.nr_decision_columns());

        self.rows.push(row);
        self.basis.push(Some(basic_column));
        self.nr_rows() - 1
    }

    /// Remove a constraint row.
    pub(crate) fn remove_row(&mut self, i: usize) {
        debug_assert!(i > 0 && i < self.nr_rows());

        self.rows.remove(i);
        self.basis.remove(i - 1);
    }

    /// Register the basic column of a row, without changing any values.
    pub(crate) fn set_basic_column(&mut self, i: usize, j: usize) {
        debug_assert!(i > 0 && i < self.nr_rows());
        debug_assert!(j < self.nr_decision_columns());

        self.basis[i - 1] = Some(j);
    }

    /// Replace the objective row.
    ///
    /// A row that was taken out before columns were inserted is padded with zeros in the place of
    /// those columns.
    ///
    /// # Return value
    ///
    /// The previous objective row.
    pub(crate) fn replace_objective_row(&mut self, mut row: Vec<BigInt>) -> Vec<BigInt> {
        debug_assert!(row.len() <= self.nr_columns());

        let missing = self.nr_columns() - row.len();
        let at = row.len() - K::BOOKKEEPING.len();
        row.splice(at..at, repeat_n(BigInt::zero(), missing));

        std::mem::replace(&mut self.rows[0], row)
    }

    /// Multiply a row by `-1`.
    pub(crate) fn negate_row(&mut self, i: usize) {
        for value in &mut self.rows[i] {
            *value = -&*value;
        }
    }

    /// Divide a row at zero level by a common divisor of its entries outside the artificial
    /// columns.
    pub(crate) fn divide_row(&mut self, i: usize, divisor: &BigInt) {
        debug_assert!(i > 0 && self.right_hand_side(i).is_zero());

        for (value, role) in self.rows[i].iter_mut().zip(&self.roles) {
            if *role != ColumnRole::Artificial {
                debug_assert!(value.is_multiple_of(divisor));
                *value = &*value / divisor;
            }
        }
    }

    /// Set all entries of a column to zero.
    pub(crate) fn clear_column(&mut self, j: usize) {
        debug_assert!(j < self.nr_decision_columns());

        for row in &mut self.rows {
            row[j] = BigInt::zero();
        }
    }

    /// Whether no constraint row has a strictly positive entry in this column.
    ///
    /// A profitable column of this shape shows that the problem is unbounded.
    pub fn is_column_nonpositive(&self, j: usize) -> bool {
        self.rows[1..].iter().all(|row| !row[j].is_positive())
    }

    /// Determine the row to pivot on, given the column.
    ///
    /// This is the row with a positive entry in the column and the minimal ratio between its
    /// right-hand side and that entry. Ties are broken in favor of the lowest row index.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. `None` if the column has no positive entry.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.nr_decision_columns());

        // (row index, right-hand side, entry)
        let mut minimum: Option<(usize, &BigInt, &BigInt)> = None;
        for i in 1..self.nr_rows() {
            let entry = &self.rows[i][column];
            if entry.is_positive() {
                let right_hand_side = self.right_hand_side(i);
                // Entries are positive, so comparing cross products compares the ratios
                let is_smaller = minimum.map_or(true, |(_, minimum_rhs, minimum_entry)| {
                    right_hand_side * minimum_entry < minimum_rhs * entry
                });
                if is_smaller {
                    minimum = Some((i, right_hand_side, entry));
                }
            }
        }

        minimum.map(|(i, _, _)| i)
    }

    /// Apply the fraction-free pivot transform.
    ///
    /// Every row `i` other than the pivot row becomes `row[i] * pivot_value - pivot_row *
    /// row[i][column]`. The pivot row itself is not scaled. Integer input stays integral.
    pub fn pivot(&mut self, pivot: Pivot) {
        debug_assert!(pivot.row > 0 && pivot.row < self.nr_rows());
        debug_assert!(pivot.column < self.nr_decision_columns());
        debug_assert!(!self.rows[pivot.row][pivot.column].is_zero());

        let pivot_row = self.rows[pivot.row].clone();
        for (i, row) in self.rows.iter_mut().enumerate() {
            if i != pivot.row {
                eliminate(row, &pivot_row, pivot.column);
            }
        }
        self.basis[pivot.row - 1] = Some(pivot.column);
    }

    /// Eliminate the pivot column from the objective row only.
    ///
    /// Used to express a restored objective in terms of the current basis. Nothing happens when the
    /// objective row already has a zero in the pivot column.
    pub(crate) fn eliminate_from_objective(&mut self, pivot: Pivot) {
        if !self.rows[0][pivot.column].is_zero() {
            let (objective, constraints) = self.rows.split_at_mut(1);
            eliminate(&mut objective[0], &constraints[pivot.row - 1], pivot.column);
        }
    }

    /// Whether the objective row has no positive entry, ignoring the right-hand side.
    pub fn is_optimal(&self) -> bool {
        is_all_negative_but_last(self.objective_row())
    }

    /// Value of the objective function in the current basic solution.
    ///
    /// This is the maximization value; for minimization problems it still needs to be negated.
    pub fn objective_function_value(&self) -> BigRational {
        K::objective_function_value(self.objective_row())
    }

    /// Values of the structural variables in the current basic solution.
    pub fn current_bfs(&self) -> Vec<BigRational> {
        let mut values = vec![BigRational::zero(); self.nr_structural];
        for (i, basic) in self.basis.iter().enumerate() {
            if let Some(j) = *basic {
                if j < self.nr_structural {
                    let row = &self.rows[i + 1];
                    values[j] = BigRational::new(self.right_hand_side(i + 1).clone(), row[j].clone());
                }
            }
        }

        values
    }

    /// Divide every row by the greatest common divisor of its entries.
    ///
    /// Only meant for a terminal tableau: ratios between rows change. The objective row is left
    /// alone when the kind has no `z` column, as that would change the objective function value.
    pub fn simplify(&mut self) {
        let first = if K::BOOKKEEPING.contains(&ColumnRole::ObjectiveValue) { 0 } else { 1 };
        for row in &mut self.rows[first..] {
            let divisor = row.iter().fold(BigInt::zero(), |divisor, value| divisor.gcd(value));
            if divisor > BigInt::one() {
                for value in row.iter_mut() {
                    *value = &*value / &divisor;
                }
            }
        }
    }
}

/// `row = row * pivot_row[column] - pivot_row * row[column]`, element-wise.
fn eliminate(row: &mut [BigInt], pivot_row: &[BigInt], column: usize) {
    debug_assert_eq!(row.len(), pivot_row.len());

    let pivot_value = &pivot_row[column];
    let factor = row[column].clone();
    for (value, pivot_entry) in row.iter_mut().zip(pivot_row) {
        *value = &*value * pivot_value - pivot_entry * &factor;
    }
}

impl<K: Kind> Display for Tableau<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        Snapshot::new(self).fmt(f)
    }
}
