//! # Phase two: improving a basic feasible solution
use log::info;

use crate::algorithm::SolveError;
use crate::algorithm::two_phase::{LoopOutcome, Observer, Phase, Run, StoppingCondition};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::tableau::Tableau;

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible <=> c >= 0)
/// - All constraint values need to be positive (primary feasibility)
///
/// # Return value
///
/// Whether the loop ended in an optimal tableau or found the problem to be unbounded. It cannot be
/// infeasible, as a feasible solution is needed to start using this method.
pub(crate) fn primal<K, PR, O>(
    tableau: &mut Tableau<K>,
    run: &mut Run<'_, O>,
) -> Result<LoopOutcome, SolveError>
where
    K: Kind,
    PR: PivotRule,
    O: Observer<K>,
{
    debug_assert!((1..tableau.nr_rows()).all(|i| tableau.basic_column(i).is_some()));
    info!("Phase two, starting at iteration {}", run.iterations);

    super::primal::<K, PR, O>(tableau, run, Phase::Two, StoppingCondition::Optimal)
}

#[cfg(test)]
mod test {
    use crate::algorithm::SolverConfig;
    use crate::algorithm::two_phase::{LoopOutcome, Run, Silent};
    use crate::algorithm::two_phase::phase_two::primal;
    use crate::algorithm::two_phase::strategy::pivot_rule::FirstProfitable;
    use crate::algorithm::two_phase::tableau::kind::continuous::Continuous;
    use crate::algorithm::two_phase::tableau::Tableau;
    use crate::tests::rows;

    #[test]
    fn optimal() {
        let mut tableau = Tableau::<Continuous>::from_rows(rows(&[
            &[1, 3, 1, 0, 0, -1, 0],
            &[2, 4, 1, 1, 0, 0, 7],
            &[3, -1, 2, 0, 1, 0, 3],
        ]), 3);
        let config = SolverConfig::default();
        let mut observer = Silent;
        let mut run = Run::new(&config, &mut observer);

        assert_eq!(primal::<_, FirstProfitable, _>(&mut tableau, &mut run), Ok(LoopOutcome::Stopped));
        assert!(tableau.is_optimal());
        assert_eq!(run.iterations, 3);
    }

    #[test]
    fn unbounded() {
        let mut tableau = Tableau::<Continuous>::from_rows(rows(&[
            &[1, 1, 0, -1, 0],
            &[1, -1, 1, 0, 2],
        ]), 2);
        let config = SolverConfig::default();
        let mut observer = Silent;
        let mut run = Run::new(&config, &mut observer);

        assert_eq!(primal::<_, FirstProfitable, _>(&mut tableau, &mut run), Ok(LoopOutcome::Unbounded));
    }
}
