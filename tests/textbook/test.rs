use num_bigint::BigInt;
use num_rational::BigRational;

use tableau_simplex::algorithm::{OptimizationResult, Solve, SolverConfig};
use tableau_simplex::algorithm::two_phase::tableau::kind::Kind;
use tableau_simplex::algorithm::two_phase::tableau::kind::all_integer::AllInteger;
use tableau_simplex::algorithm::two_phase::tableau::kind::continuous::Continuous;
use tableau_simplex::io::error::{ImportError, ParseError};
use tableau_simplex::io::import;

use super::{get_test_file_path, read};

fn r(numerator: i64, denominator: i64) -> BigRational {
    BigRational::new(BigInt::from(numerator), BigInt::from(denominator))
}

/// Solve and compare the optimum.
fn assert_optimum<K: Kind>(name: &str, value: BigRational, solution_values: &[BigRational]) {
    let _ = env_logger::builder().is_test(true).try_init();

    match read(name).solve::<K>(&SolverConfig::default()) {
        Ok(OptimizationResult::FiniteOptimum(solution)) => {
            assert_eq!(solution.objective_value(), &value);
            assert_eq!(solution.solution_values(), solution_values);
        },
        other => panic!("{name}: {other:?}"),
    }
}

#[test]
fn fractional() {
    assert_optimum::<Continuous>("fractional", r(52, 9), &[r(0, 1), r(11, 9), r(19, 9)]);
    assert_optimum::<AllInteger>("fractional", r(5, 1), &[r(0, 1), r(1, 1), r(2, 1)]);
}

#[test]
fn diet() {
    assert_optimum::<Continuous>("diet", r(9, 1), &[r(3, 1), r(1, 1)]);
    assert_optimum::<AllInteger>("diet", r(9, 1), &[r(3, 1), r(1, 1)]);
}

#[test]
fn production() {
    assert_optimum::<Continuous>("production", r(37, 4), &[r(9, 4), r(5, 4)]);
    assert_optimum::<AllInteger>("production", r(8, 1), &[r(2, 1), r(1, 1)]);
}

#[test]
fn rounding() {
    assert_optimum::<Continuous>("rounding", r(21, 1), &[r(3, 1), r(3, 2)]);
    assert_optimum::<AllInteger>("rounding", r(20, 1), &[r(4, 1), r(0, 1)]);
}

#[test]
fn negative_right_hand_side() {
    assert_optimum::<Continuous>("negative_right_hand_side", r(-2, 1), &[r(2, 1), r(0, 1)]);
    assert_optimum::<AllInteger>("negative_right_hand_side", r(-2, 1), &[r(2, 1), r(0, 1)]);
}

#[test]
fn duplicate_constraint() {
    assert_optimum::<Continuous>("duplicate_constraint", r(2, 1), &[r(2, 1), r(0, 1)]);
    assert_optimum::<AllInteger>("duplicate_constraint", r(2, 1), &[r(2, 1), r(0, 1)]);
}

#[test]
fn mixed_relations() {
    assert_optimum::<Continuous>("mixed_relations", r(8, 1), &[r(4, 1), r(0, 1)]);
    assert_optimum::<AllInteger>("mixed_relations", r(8, 1), &[r(4, 1), r(0, 1)]);
}

#[test]
fn unbounded() {
    let problem = read("unbounded");
    assert!(matches!(problem.solve::<Continuous>(&SolverConfig::default()), Ok(OptimizationResult::Unbounded)));
    assert!(matches!(problem.solve::<AllInteger>(&SolverConfig::default()), Ok(OptimizationResult::Unbounded)));
}

#[test]
fn unbounded_surplus() {
    let problem = read("unbounded_surplus");
    assert!(matches!(problem.solve::<Continuous>(&SolverConfig::default()), Ok(OptimizationResult::Unbounded)));
    assert!(matches!(problem.solve::<AllInteger>(&SolverConfig::default()), Ok(OptimizationResult::Unbounded)));
}

#[test]
fn infeasible() {
    let problem = read("infeasible");
    assert!(matches!(problem.solve::<Continuous>(&SolverConfig::default()), Ok(OptimizationResult::Infeasible)));
    assert!(matches!(problem.solve::<AllInteger>(&SolverConfig::default()), Ok(OptimizationResult::Infeasible)));
}

#[test]
fn equality() {
    match import(&get_test_file_path("equality")) {
        Err(ImportError::Parse(error)) => {
            assert_eq!(error.root(), &ParseError::UnsupportedConstraint("=".to_string()));
        },
        other => panic!("{other:?}"),
    }
}

#[test]
fn missing() {
    assert!(matches!(import(&get_test_file_path("missing")), Err(ImportError::IO(_))));
}
