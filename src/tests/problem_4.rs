//! A problem where phase one ends with an artificial variable at zero level, in a row without a
//! unit entry.
use crate::algorithm::{OptimizationResult, Solve, SolveError, SolverConfig};
use crate::algorithm::two_phase::tableau::kind::all_integer::AllInteger;
use crate::algorithm::two_phase::tableau::kind::continuous::Continuous;
use crate::data::linear_program::elements::ColumnRole;
use crate::data::linear_program::problem::Problem;
use crate::io::parse::parse;
use crate::tests::{integers, rational, rows};

const PROBLEM_LITERAL_STRING: &str = "max -1 -1
-4 3 >= 9
1 0 <= 6
0 1 <= 6
";

fn problem() -> Problem {
    parse(PROBLEM_LITERAL_STRING).unwrap()
}

#[test]
fn continuous() {
    match problem().solve::<Continuous>(&SolverConfig::default()) {
        Ok(OptimizationResult::FiniteOptimum(solution)) => {
            assert_eq!(solution.objective_value(), &rational(-3, 1));
            assert_eq!(solution.solution_values(), &integers(&[0, 3])[..]);
            assert_eq!(solution.iterations(), 1);
        },
        other => panic!("{other:?}"),
    }
}

#[test]
fn all_integer() {
    match problem().solve::<AllInteger>(&SolverConfig::default()) {
        Ok(OptimizationResult::FiniteOptimum(solution)) => {
            assert_eq!(solution.objective_value(), &rational(-3, 1));
            assert_eq!(solution.solution_values(), &integers(&[0, 3])[..]);
            assert_eq!(solution.iterations(), 2);

            let tableau = solution.into_tableau();
            assert_eq!(tableau.role_counts()[ColumnRole::Cut], 2);
            assert_eq!(tableau.rows(), &rows(&[
                &[-2, 0, 0, 0, 0, 0, 0, -1, 3],
                &[0, 0, 0, 0, 0, 0, 1, -2, 0],
                &[1, 0, 0, 1, 0, 0, 0, 0, 6],
                &[1, 0, 0, 0, 1, 0, 0, 1, 3],
                &[-1, 1, 0, 0, 0, 0, 0, -1, 3],
                &[1, 0, 1, 0, 0, 0, 0, -3, 0],
            ])[..]);
        },
        other => panic!("{other:?}"),
    }
}

#[test]
fn cut_limit_while_leaving_phase_one() {
    let config = SolverConfig { max_cuts: Some(1), ..SolverConfig::default() };
    assert_eq!(problem().solve::<AllInteger>(&config), Err(SolveError::CutLimit(1)));
}
