//! Generational multi-objective evolutionary engine.
//!
//! An engine is assembled from interchangeable parts: a [`Problem`], an
//! [`Evaluator`], selection / crossover / mutation operators, a
//! [`Replacement`] strategy and a [`GenerationHook`]. [`Moea`] owns the
//! population and the [`ReferencePoints`] (utopia / nadir) and drives the
//! generational loop.
//!
//! # Core Traits
//!
//! - [`Solution`]: a candidate with a fixed-length objective vector
//! - [`Problem`]: solution factory and objective computation
//! - [`Evaluator`]: evaluates a whole population, possibly in parallel
//! - [`SelectionOperator`], [`CrossoverOperator`], [`MutationOperator`]
//! - [`Replacement`]: builds the next generation
//! - [`GenerationHook`]: per-variant computations after each evaluation
//!
//! # Key Types
//!
//! - [`MoeaConfig`]: population size, generation limit, parent source, seed
//! - [`Moea`] / [`MoeaBuilder`]: the engine and its assembly
//!
//! # Submodules
//!
//! - [`ranking`]: Pareto dominance, non-dominated sorting, crowding distance
//! - [`operators`]: SBX crossover and polynomial mutation for [`RealSolution`]
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*
//! - Hernández Gómez & Coello Coello (2013), *MOMBI: A new metaheuristic for
//!   many-objective optimization based on the R2 indicator*

mod config;
mod engine;
mod evaluator;
mod hook;
pub mod operators;
pub mod ranking;
mod reference_point;
mod replacement;
mod selection;
mod types;

pub use config::{MoeaConfig, ParentSource};
pub use engine::{Moea, MoeaBuilder, Phase};
#[cfg(feature = "parallel")]
pub use evaluator::ParallelEvaluator;
pub use evaluator::{Evaluator, SequentialEvaluator};
pub use hook::{GenerationHook, NoHook, TrackReferencePoints};
pub use operators::{PolynomialMutation, SbxCrossover};
pub use reference_point::ReferencePoints;
pub use replacement::{
    RankingAndCrowdingReplacement, Replacement, SingleObjectiveGenerationalReplacement,
};
pub use selection::{BinaryTournamentSelection, RandomSelection};
pub use types::{
    CrossoverOperator, MutationOperator, Problem, RealSolution, SelectionOperator, Solution,
};
