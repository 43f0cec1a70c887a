//! Generational replacement strategies.
//!
//! A [`Replacement`] merges the current population with the offspring and
//! returns the next generation. Every implementation returns exactly
//! `current.len()` solutions, all taken from the union of its inputs.
//!
//! - [`SingleObjectiveGenerationalReplacement`]: truncation on one objective
//! - [`RankingAndCrowdingReplacement`]: Pareto rank, then crowding distance

use super::ranking::{crowding_distance, non_dominated_sort, objective_cmp};
use super::types::Solution;
use crate::error::{MoeaError, Result};

/// Builds the next generation from the current and offspring populations.
pub trait Replacement<S>: Send + Sync {
    /// Returns a human-readable name for this strategy.
    fn name(&self) -> &str;

    /// Returns the next generation. Its length must equal `current.len()`.
    fn replace(&self, current: Vec<S>, offspring: Vec<S>) -> Vec<S>;

    /// Checks the strategy against the problem's objective count before a
    /// run. Fails with [`MoeaError::InvalidConfig`] if it cannot work on
    /// vectors of that length.
    fn check_objectives(&self, _number_of_objectives: usize) -> Result<()> {
        Ok(())
    }
}

/// Keeps the `|current|` best solutions on one objective.
///
/// The joint population is stable-sorted ascending on the designated
/// objective (ties keep concatenation order, current before offspring)
/// and truncated from the tail. NaN keys sort after every number, so they
/// are the first to be discarded.
///
/// # Panics
/// [`Replacement::replace`] panics if the objective index is not below the
/// solutions' objective count. [`MoeaBuilder::build`](super::MoeaBuilder::build)
/// rejects such an index up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SingleObjectiveGenerationalReplacement {
    objective: usize,
}

impl SingleObjectiveGenerationalReplacement {
    /// Sorts on objective `objective`.
    pub fn new(objective: usize) -> Self {
        Self { objective }
    }

    /// The objective index used as the sort key.
    pub fn objective(&self) -> usize {
        self.objective
    }
}

impl<S: Solution> Replacement<S> for SingleObjectiveGenerationalReplacement {
    fn name(&self) -> &str {
        "single-objective generational"
    }

    fn replace(&self, current: Vec<S>, offspring: Vec<S>) -> Vec<S> {
        let size = current.len();
        let mut joint = current;
        joint.extend(offspring);

        let k = self.objective;
        // `sort_by` is stable: equal keys stay in concatenation order.
        joint.sort_by(|a, b| objective_cmp(a.objective(k), b.objective(k)));
        joint.truncate(size);
        joint
    }

    fn check_objectives(&self, number_of_objectives: usize) -> Result<()> {
        if self.objective >= number_of_objectives {
            return Err(MoeaError::InvalidConfig(format!(
                "replacement sorts on objective {}, problem has {number_of_objectives}",
                self.objective
            )));
        }
        Ok(())
    }
}

/// NSGA-II style replacement.
///
/// Whole fronts of the joint population are accepted in rank order; the
/// first front that does not fit is truncated by descending crowding
/// distance (ties keep front order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankingAndCrowdingReplacement;

impl RankingAndCrowdingReplacement {
    pub fn new() -> Self {
        Self
    }
}

impl<S: Solution> Replacement<S> for RankingAndCrowdingReplacement {
    fn name(&self) -> &str {
        "ranking and crowding"
    }

    fn replace(&self, current: Vec<S>, offspring: Vec<S>) -> Vec<S> {
        let size = current.len();
        let joint: Vec<S> = current.into_iter().chain(offspring).collect();

        let chosen = {
            let objectives: Vec<&[f64]> = joint.iter().map(|s| s.objectives()).collect();
            let ranking = non_dominated_sort(&objectives);

            let mut chosen: Vec<usize> = Vec::with_capacity(size);
            for front in &ranking.fronts {
                let room = size - chosen.len();
                if room == 0 {
                    break;
                }
                if front.len() <= room {
                    chosen.extend_from_slice(front);
                    continue;
                }

                let members: Vec<&[f64]> = front.iter().map(|&i| objectives[i]).collect();
                let distance = crowding_distance(&members);
                let mut order: Vec<usize> = (0..front.len()).collect();
                order.sort_by(|&a, &b| objective_cmp(distance[b], distance[a]));
                chosen.extend(order.into_iter().take(room).map(|pos| front[pos]));
            }
            chosen
        };

        let mut slots: Vec<Option<S>> = joint.into_iter().map(Some).collect();
        chosen
            .into_iter()
            .filter_map(|i| slots[i].take())
            .collect()
    }
}
