//! Algorithm-specific computations run after each evaluation.
//!
//! The engine calls [`GenerationHook::after_evaluation`] once after the
//! initial population is evaluated and once after every offspring
//! evaluation, before replacement. Variants use it to maintain derived
//! state, typically the utopia / nadir points.

use super::reference_point::ReferencePoints;
use super::types::Solution;

/// Per-variant computation invoked with each freshly evaluated population.
///
/// Closures of the form `FnMut(&[S], &mut ReferencePoints) ->
/// anyhow::Result<()>` implement this trait.
pub trait GenerationHook<S>: Send {
    /// Called with the population that was just evaluated: the initial
    /// population on the first call, the offspring afterwards.
    fn after_evaluation(
        &mut self,
        evaluated: &[S],
        points: &mut ReferencePoints,
    ) -> anyhow::Result<()>;
}

impl<S, F> GenerationHook<S> for F
where
    F: FnMut(&[S], &mut ReferencePoints) -> anyhow::Result<()> + Send,
{
    fn after_evaluation(
        &mut self,
        evaluated: &[S],
        points: &mut ReferencePoints,
    ) -> anyhow::Result<()> {
        self(evaluated, points)
    }
}

/// Updates utopia and nadir with every evaluated solution.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackReferencePoints;

impl<S: Solution> GenerationHook<S> for TrackReferencePoints {
    fn after_evaluation(
        &mut self,
        evaluated: &[S],
        points: &mut ReferencePoints,
    ) -> anyhow::Result<()> {
        points.update_from(evaluated);
        Ok(())
    }
}

/// Leaves every point untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHook;

impl<S> GenerationHook<S> for NoHook {
    fn after_evaluation(&mut self, _: &[S], _: &mut ReferencePoints) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moea::RealSolution;
    use std::sync::Arc;

    fn evaluated(objs: &[[f64; 2]]) -> Vec<RealSolution> {
        let bounds: Arc<[(f64, f64)]> = vec![(0.0, 1.0)].into();
        objs.iter()
            .map(|o| {
                let mut s = RealSolution::new(vec![0.0], bounds.clone(), 2);
                s.objectives = o.to_vec();
                s
            })
            .collect()
    }

    #[test]
    fn test_track_reference_points() {
        let mut points = ReferencePoints::new(2);
        let mut hook = TrackReferencePoints;
        hook.after_evaluation(&evaluated(&[[3.0, 4.0]]), &mut points).unwrap();
        hook.after_evaluation(&evaluated(&[[1.0, 9.0]]), &mut points).unwrap();
        assert_eq!(points.utopia(), &[1.0, 4.0]);
        assert_eq!(points.nadir(), &[3.0, 9.0]);
    }

    #[test]
    fn test_closure_hook() {
        let mut calls = 0usize;
        {
            let mut hook = |population: &[RealSolution], points: &mut ReferencePoints| -> anyhow::Result<()> {
                calls += population.len();
                points.update_utopia_from(population);
                Ok(())
            };
            let mut points = ReferencePoints::new(2);
            hook.after_evaluation(&evaluated(&[[2.0, 2.0], [1.0, 3.0]]), &mut points)
                .unwrap();
            assert_eq!(points.utopia(), &[1.0, 2.0]);
        }
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_no_hook_leaves_points() {
        let mut points = ReferencePoints::new(2);
        NoHook
            .after_evaluation(&evaluated(&[[1.0, 1.0]]), &mut points)
            .unwrap();
        assert_eq!(points, ReferencePoints::new(2));
    }
}
