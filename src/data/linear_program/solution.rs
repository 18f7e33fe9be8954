//! # Representation of optimal solutions
//!
//! Once a linear program is fully solved, a solution is derived from the terminal tableau.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;
use num_rational::BigRational;

use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::tableau::Tableau;

/// An optimal solution of a linear program.
///
/// Values are exact, also in the continuous case.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution<K> {
    /// Value of the objective function, in the direction of the original problem.
    objective_value: BigRational,
    /// Value of each variable of the original problem.
    solution_values: Vec<BigRational>,
    /// Number of pivots performed across both phases.
    iterations: usize,
    /// The final tableau.
    tableau: Tableau<K>,
}

impl<K: Kind> Solution<K> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(
        objective_value: BigRational,
        solution_values: Vec<BigRational>,
        iterations: usize,
        tableau: Tableau<K>,
    ) -> Self {
        debug_assert_eq!(solution_values.len(), tableau.nr_structural());

        Self { objective_value, solution_values, iterations, tableau }
    }

    /// Optimal objective function value.
    pub fn objective_value(&self) -> &BigRational {
        &self.objective_value
    }

    /// Values of the variables, in the order of the original problem.
    pub fn solution_values(&self) -> &[BigRational] {
        &self.solution_values
    }

    /// Number of pivots that were performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// The terminal tableau.
    pub fn tableau(&self) -> &Tableau<K> {
        &self.tableau
    }

    /// Consume the solution, keeping only the terminal tableau.
    pub fn into_tableau(self) -> Tableau<K> {
        self.tableau
    }
}

impl<K: Kind> Display for Solution<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(f, "Optimal value: {}", self.objective_value)?;
        writeln!(
            f,
            "Solution: {}",
            self.solution_values.iter()
                .enumerate()
                .map(|(j, value)| format!("x{} = {value}", j + 1))
                .join(", "),
        )?;
        write!(f, "Iterations: {}", self.iterations)
    }
}
