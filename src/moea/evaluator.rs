//! Population evaluators.
//!
//! An [`Evaluator`] fills the objective vectors of a whole population.
//! From the engine's point of view the call is synchronous; an
//! implementation may fan the work out internally, but must return the
//! same solutions in the same order.

use super::types::Problem;

/// Computes objective vectors for a population.
pub trait Evaluator<P: Problem>: Send + Sync {
    /// Evaluates every solution of `population`.
    ///
    /// The returned population must have the same length and order as
    /// the input.
    fn evaluate(
        &self,
        population: Vec<P::Solution>,
        problem: &P,
    ) -> anyhow::Result<Vec<P::Solution>>;
}

/// Evaluates solutions one after another on the calling thread.
///
/// Stops at the first failing solution and returns its error.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialEvaluator;

impl<P: Problem> Evaluator<P> for SequentialEvaluator {
    fn evaluate(
        &self,
        mut population: Vec<P::Solution>,
        problem: &P,
    ) -> anyhow::Result<Vec<P::Solution>> {
        for solution in population.iter_mut() {
            problem.evaluate(solution)?;
        }
        Ok(population)
    }
}

/// Evaluates solutions concurrently on the rayon thread pool.
///
/// Order is preserved because every solution is evaluated in its own
/// slot. If several solutions fail, which error is reported is
/// unspecified.
#[cfg(feature = "parallel")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelEvaluator;

#[cfg(feature = "parallel")]
impl<P: Problem> Evaluator<P> for ParallelEvaluator {
    fn evaluate(
        &self,
        mut population: Vec<P::Solution>,
        problem: &P,
    ) -> anyhow::Result<Vec<P::Solution>> {
        use rayon::prelude::*;

        population
            .par_iter_mut()
            .try_for_each(|solution| problem.evaluate(solution))?;
        Ok(population)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moea::{RealSolution, Solution};
    use rand::Rng;
    use std::sync::Arc;

    /// f1 = x, f2 = 1 - x; fails on negative inputs.
    struct Line;

    impl Problem for Line {
        type Solution = RealSolution;

        fn number_of_objectives(&self) -> usize {
            2
        }

        fn create_solution<R: Rng>(&self, rng: &mut R) -> Option<RealSolution> {
            Some(RealSolution::random(vec![(0.0, 1.0)].into(), 2, rng))
        }

        fn evaluate(&self, s: &mut RealSolution) -> anyhow::Result<()> {
            let x = s.variables[0];
            anyhow::ensure!(x >= 0.0, "negative input {x}");
            s.set_objective(0, x);
            s.set_objective(1, 1.0 - x);
            Ok(())
        }
    }

    fn population(xs: &[f64]) -> Vec<RealSolution> {
        let bounds: Arc<[(f64, f64)]> = vec![(-1.0, 1.0)].into();
        xs.iter()
            .map(|&x| RealSolution::new(vec![x], bounds.clone(), 2))
            .collect()
    }

    #[test]
    fn test_sequential_preserves_order() {
        let evaluated = SequentialEvaluator
            .evaluate(population(&[0.1, 0.7, 0.4]), &Line)
            .unwrap();
        let first: Vec<f64> = evaluated.iter().map(|s| s.objective(0)).collect();
        assert_eq!(first, vec![0.1, 0.7, 0.4]);
        assert!((evaluated[1].objective(1) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_sequential_propagates_failure() {
        let err = SequentialEvaluator
            .evaluate(population(&[0.1, -0.5]), &Line)
            .unwrap_err();
        assert!(err.to_string().contains("negative input"));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let xs: Vec<f64> = (0..200).map(|i| i as f64 / 200.0).collect();
        let seq = SequentialEvaluator.evaluate(population(&xs), &Line).unwrap();
        let par = ParallelEvaluator.evaluate(population(&xs), &Line).unwrap();
        assert_eq!(seq, par);
    }
}
