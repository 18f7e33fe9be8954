use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use tableau_simplex::algorithm::{OptimizationResult, Solve, SolveError, SolverConfig};
use tableau_simplex::algorithm::two_phase::Observer;
use tableau_simplex::algorithm::two_phase::tableau::kind::Kind;
use tableau_simplex::algorithm::two_phase::tableau::kind::all_integer::AllInteger;
use tableau_simplex::algorithm::two_phase::tableau::kind::continuous::Continuous;
use tableau_simplex::algorithm::two_phase::tableau::snapshot::Snapshot;
use tableau_simplex::data::linear_program::problem::Problem;
use tableau_simplex::io::import;

/// Solve a linear program with the tableau simplex method.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// File containing the problem description
    #[arg(default_value = "problem.txt")]
    problem_file: PathBuf,
    /// Only accept integral solutions
    #[arg(long)]
    integer: bool,
    /// Maximum number of pivots [default: 10000]
    #[arg(long, conflicts_with = "no_limits")]
    max_iterations: Option<usize>,
    /// Maximum number of cuts in the integer variant [default: 1000]
    #[arg(long, conflicts_with = "no_limits")]
    max_cuts: Option<usize>,
    /// Pivot and cut without any limit
    #[arg(long)]
    no_limits: bool,
    /// Divide the rows of the final tableau by their greatest common divisor
    #[arg(long)]
    simplify: bool,
    /// Print the tableau before every pivot
    #[arg(short, long)]
    verbose: bool,
}

impl Opts {
    fn config(&self) -> SolverConfig {
        if self.no_limits {
            return SolverConfig { max_iterations: None, max_cuts: None, simplify_final: self.simplify };
        }

        let default = SolverConfig::default();
        SolverConfig {
            max_iterations: self.max_iterations.or(default.max_iterations),
            max_cuts: self.max_cuts.or(default.max_cuts),
            simplify_final: self.simplify,
        }
    }
}

/// Prints the snapshots it receives.
struct Printer {
    verbose: bool,
}

impl<K: Kind> Observer<K> for Printer {
    fn observe(&mut self, snapshot: Snapshot<'_, K>) {
        // The terminal tableau is always printed
        if self.verbose || snapshot.pivot().is_none() {
            println!("{snapshot}\n");
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let opts: Opts = Opts::parse();

    println!("Reading problem file: \"{}\"...", opts.problem_file.display());
    let problem = match import(&opts.problem_file) {
        Ok(problem) => problem,
        Err(error) => {
            error!("Could not import {}: {error}", opts.problem_file.display());
            eprintln!("{error}");
            return ExitCode::FAILURE;
        },
    };

    let config = opts.config();
    let mut printer = Printer { verbose: opts.verbose };
    let outcome = if opts.integer {
        report(solve::<AllInteger>(&problem, &config, &mut printer))
    } else {
        report(solve::<Continuous>(&problem, &config, &mut printer))
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        },
    }
}

fn solve<K: Kind>(
    problem: &Problem,
    config: &SolverConfig,
    printer: &mut Printer,
) -> Result<OptimizationResult<K>, SolveError> {
    println!("Solving with a {} tableau...", K::NAME);
    problem.solve_observed(config, printer)
}

fn report<K: Kind>(result: Result<OptimizationResult<K>, SolveError>) -> Result<(), SolveError> {
    match result? {
        OptimizationResult::FiniteOptimum(solution) => println!("{solution}"),
        OptimizationResult::Infeasible => println!("Problem is not feasible."),
        OptimizationResult::Unbounded => println!("Problem is unbounded."),
    }

    Ok(())
}
