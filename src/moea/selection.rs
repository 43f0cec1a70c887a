//! Reference selection operators.
//!
//! Both operators sample **with replacement**: the same solution can fill
//! several mating-pool slots.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::ranking::{dominance_cmp, Dominance};
use super::types::{SelectionOperator, Solution};
use rand::{Rng, RngCore};

/// Picks a solution uniformly at random.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelection;

impl<S: Solution> SelectionOperator<S> for RandomSelection {
    fn name(&self) -> &str {
        "random"
    }

    fn execute(&self, population: &[S], rng: &mut dyn RngCore) -> anyhow::Result<S> {
        anyhow::ensure!(!population.is_empty(), "cannot select from empty population");
        Ok(population[rng.random_range(0..population.len())].clone())
    }
}

/// Binary tournament on Pareto dominance.
///
/// Two candidates are drawn at random; the dominating one wins. When
/// neither dominates, the winner is picked with a fair coin.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryTournamentSelection;

impl<S: Solution> SelectionOperator<S> for BinaryTournamentSelection {
    fn name(&self) -> &str {
        "binary tournament"
    }

    fn execute(&self, population: &[S], rng: &mut dyn RngCore) -> anyhow::Result<S> {
        anyhow::ensure!(!population.is_empty(), "cannot select from empty population");

        let n = population.len();
        let a = &population[rng.random_range(0..n)];
        let b = &population[rng.random_range(0..n)];

        let winner = match dominance_cmp(a.objectives(), b.objectives()) {
            Dominance::Left => a,
            Dominance::Right => b,
            Dominance::Neither if rng.random_bool(0.5) => a,
            Dominance::Neither => b,
        };
        Ok(winner.clone())
    }
}
