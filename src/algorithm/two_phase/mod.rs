//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the two phase simplex method on
//! an explicit, fraction-free tableau. The first phase searches a basic feasible solution using
//! artificial variables, the second phase improves it until it is optimal.
use log::{debug, info, trace};
use num_traits::Zero;

use crate::algorithm::{OptimizationResult, SolveError, SolverConfig};
use crate::algorithm::two_phase::phase_one::{Feasibility, Rank};
use crate::algorithm::two_phase::strategy::pivot_rule::{ColumnSelection, PivotRule};
use crate::algorithm::two_phase::tableau::kind::{Kind, PreparedPivot};
use crate::algorithm::two_phase::tableau::snapshot::Snapshot;
use crate::algorithm::two_phase::tableau::{Pivot, Tableau};
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::problem::Problem;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::{normalize_right_hand_sides, standardize};

pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;

/// The two phases of the two phase method.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Searching for a basic feasible solution, with an auxiliary objective.
    One,
    /// Optimizing the original objective.
    Two,
}

/// Receives a view on the tableau whenever something happens to it.
pub trait Observer<K> {
    /// Called before each pivot, and once with the terminal tableau.
    fn observe(&mut self, snapshot: Snapshot<'_, K>);
}

/// Ignores everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct Silent;

impl<K> Observer<K> for Silent {
    fn observe(&mut self, _snapshot: Snapshot<'_, K>) {}
}

/// When the pivot loop should stop, besides when no profitable column is left.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StoppingCondition {
    /// The objective row has no positive entry.
    Optimal,
    /// The auxiliary objective has reached zero, or can't be changed anymore.
    Feasible,
}

impl StoppingCondition {
    /// Whether the tableau satisfies this condition.
    pub fn is_met<K: Kind>(self, tableau: &Tableau<K>) -> bool {
        match self {
            StoppingCondition::Optimal => tableau.is_optimal(),
            StoppingCondition::Feasible => {
                let objective = tableau.objective_row();
                objective[..tableau.nr_decision_columns()].iter().all(Zero::is_zero)
                    || tableau.right_hand_side(0).is_zero()
            },
        }
    }
}

/// Why a pivot loop ended.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum LoopOutcome {
    /// The stopping condition was met, or no profitable column is left.
    Stopped,
    /// A profitable column can be increased without limit.
    Unbounded,
}

/// State shared by both phases of a single solve.
pub(crate) struct Run<'a, O> {
    config: &'a SolverConfig,
    observer: &'a mut O,
    /// Pivots performed so far.
    iterations: usize,
}

impl<'a, O> Run<'a, O> {
    pub(crate) fn new(config: &'a SolverConfig, observer: &'a mut O) -> Self {
        Self { config, observer, iterations: 0 }
    }

    /// Register a pivot.
    ///
    /// # Errors
    ///
    /// When the configured number of iterations has already been performed.
    fn next_iteration(&mut self) -> Result<(), SolveError> {
        if let Some(max_iterations) = self.config.max_iterations {
            if self.iterations >= max_iterations {
                return Err(SolveError::IterationLimit(max_iterations));
            }
        }

        self.iterations += 1;
        Ok(())
    }

    pub(crate) fn observe<K: Kind>(&mut self, snapshot: Snapshot<'_, K>)
    where
        O: Observer<K>,
    {
        trace!("\n{snapshot}");
        self.observer.observe(snapshot);
    }
}

/// Solve a problem with the two phase method.
///
/// # Arguments
///
/// * `problem`: Problem as read.
/// * `config`: Limits and options.
/// * `observer`: Receives a snapshot before every pivot and of the terminal tableau.
///
/// # Return value
///
/// Whether the problem is infeasible, unbounded or has a finite optimum.
///
/// # Errors
///
/// When a configured limit is reached, or the tableau and the constraint relations are inconsistent.
pub fn solve<K, PR, O>(
    problem: &Problem,
    config: &SolverConfig,
    observer: &mut O,
) -> Result<OptimizationResult<K>, SolveError>
where
    K: Kind,
    PR: PivotRule,
    O: Observer<K>,
{
    let mut tableau = Tableau::<K>::new(problem);
    let mut relations = problem.relations();
    normalize_right_hand_sides(&mut tableau, &mut relations);
    standardize(&mut tableau, &relations)?;
    info!(
        "Solving a {} problem with {} variables and {} constraints",
        K::NAME, problem.nr_variables(), tableau.nr_constraints(),
    );

    let mut run = Run::new(config, observer);
    match phase_one::primal::<K, PR, O>(&mut tableau, &mut run)? {
        Feasibility::Infeasible => {
            info!("Problem is infeasible after {} iterations", run.iterations);
            run.observe(Snapshot::new(&tableau).at(run.iterations, Phase::One));
            return Ok(OptimizationResult::Infeasible);
        },
        Feasibility::Feasible(Rank::Deficient(rows)) => {
            info!("Removed redundant constraints {rows:?}");
        },
        Feasibility::Feasible(Rank::Full) => (),
    }

    match phase_two::primal::<K, PR, O>(&mut tableau, &mut run)? {
        LoopOutcome::Unbounded => {
            info!("Problem is unbounded after {} iterations", run.iterations);
            run.observe(Snapshot::new(&tableau).at(run.iterations, Phase::Two));
            Ok(OptimizationResult::Unbounded)
        },
        LoopOutcome::Stopped => {
            let maximum = tableau.objective_function_value();
            let objective_value = match problem.objective() {
                Objective::Maximize => maximum,
                Objective::Minimize => -maximum,
            };
            let solution_values = tableau.current_bfs();
            info!("Optimal value {objective_value} after {} iterations", run.iterations);

            if config.simplify_final {
                tableau.simplify();
            }
            run.observe(Snapshot::new(&tableau).at(run.iterations, Phase::Two));

            let solution = Solution::new(objective_value, solution_values, run.iterations, tableau);
            Ok(OptimizationResult::FiniteOptimum(solution))
        },
    }
}

/// Pivot until the stopping condition is met, no profitable column remains, or the problem is
/// found to be unbounded.
///
/// The loop is the same for both phases, only the objective row differs.
pub(crate) fn primal<K, PR, O>(
    tableau: &mut Tableau<K>,
    run: &mut Run<'_, O>,
    phase: Phase,
    stopping_condition: StoppingCondition,
) -> Result<LoopOutcome, SolveError>
where
    K: Kind,
    PR: PivotRule,
    O: Observer<K>,
{
    let mut rule = PR::new();
    loop {
        if stopping_condition.is_met(tableau) {
            break Ok(LoopOutcome::Stopped);
        }

        let column = match rule.select_primal_pivot_column(tableau) {
            ColumnSelection::Entering(column) => column,
            ColumnSelection::Optimal => break Ok(LoopOutcome::Stopped),
            ColumnSelection::Unbounded { column } => {
                debug!("Column {column} is profitable, but has no positive entries");
                break Ok(LoopOutcome::Unbounded);
            },
        };
        let Some(row) = tableau.select_primal_pivot_row(column) else {
            break Ok(LoopOutcome::Unbounded);
        };

        run.next_iteration()?;
        let PreparedPivot { pivot, pseudo_pivot } = K::prepare_pivot(tableau, Pivot { row, column }, run.config)?;
        debug!(
            "Iteration {}: column {column} enters in row {}, pivot value {}",
            run.iterations, pivot.row, tableau.get(pivot.row, pivot.column),
        );

        run.observe(Snapshot::new(tableau).with_pivot(pivot, pseudo_pivot).at(run.iterations - 1, phase));
        tableau.pivot(pivot);
    }
}

#[cfg(test)]
mod test {
    use num_bigint::BigInt;
    use num_traits::Signed;
    use proptest::prelude::*;

    use crate::algorithm::{OptimizationResult, Solve, SolverConfig};
    use crate::algorithm::two_phase::StoppingCondition;
    use crate::algorithm::two_phase::tableau::kind::all_integer::AllInteger;
    use crate::algorithm::two_phase::tableau::kind::continuous::Continuous;
    use crate::algorithm::two_phase::tableau::kind::Kind;
    use crate::algorithm::two_phase::tableau::Tableau;
    use crate::data::linear_program::elements::{ConstraintRelation, Objective};
    use crate::data::linear_program::problem::{Constraint, Problem};
    use crate::tests::rows;

    #[test]
    fn stopping_conditions() {
        let tableau = Tableau::<Continuous>::from_rows(rows(&[
            &[0, 0, 0, -1, 3],
            &[1, 1, 1, 0, 2],
        ]), 2);
        assert!(StoppingCondition::Feasible.is_met(&tableau));
        assert!(StoppingCondition::Optimal.is_met(&tableau));

        let tableau = Tableau::<Continuous>::from_rows(rows(&[
            &[1, 0, 0, -1, 0],
            &[1, 1, 1, 0, 2],
        ]), 2);
        assert!(StoppingCondition::Feasible.is_met(&tableau));
        assert!(!StoppingCondition::Optimal.is_met(&tableau));

        let tableau = Tableau::<AllInteger>::from_rows(rows(&[
            &[1, -2, 0, 4],
            &[1, 1, 1, 2],
        ]), 2);
        assert!(!StoppingCondition::Feasible.is_met(&tableau));
    }

    fn problem() -> impl Strategy<Value = Problem> {
        (1_usize..4, 1_usize..4).prop_flat_map(|(nr_variables, nr_constraints)| {
            let constraint = (
                prop::collection::vec(-5_i64..=5, nr_variables),
                any::<bool>(),
                -5_i64..=9,
            ).prop_map(|(coefficients, is_less, right_hand_side)| Constraint::new(
                coefficients.into_iter().map(BigInt::from).collect(),
                if is_less { ConstraintRelation::Less } else { ConstraintRelation::Greater },
                BigInt::from(right_hand_side),
            ));
            (
                any::<bool>(),
                prop::collection::vec(-5_i64..=5, nr_variables),
                prop::collection::vec(constraint, nr_constraints),
            )
        }).prop_map(|(maximize, cost, constraints)| Problem::new(
            if maximize { Objective::Maximize } else { Objective::Minimize },
            cost.into_iter().map(BigInt::from).collect(),
            constraints,
        ).unwrap())
    }

    fn is_terminal<K: Kind>(problem: &Problem) -> Result<(), TestCaseError> {
        let config = SolverConfig { max_iterations: Some(200), max_cuts: Some(50), simplify_final: false };
        if let Ok(OptimizationResult::FiniteOptimum(solution)) = problem.solve::<K>(&config) {
            let tableau = solution.tableau();
            for value in &tableau.objective_row()[..tableau.nr_decision_columns()] {
                prop_assert!(!value.is_positive());
            }
            for value in solution.solution_values() {
                prop_assert!(!value.is_negative());
            }
            for i in 1..tableau.nr_rows() {
                prop_assert_eq!(tableau.row(i).len(), tableau.nr_columns());
                prop_assert!(tableau.basic_column(i).is_some());
            }
        }

        Ok(())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn optimal_objective_row_is_nonpositive(problem in problem()) {
            is_terminal::<Continuous>(&problem)?;
            is_terminal::<AllInteger>(&problem)?;
        }
    }
}
