//! Core trait definitions for the engine.
//!
//! [`Solution`] and [`Problem`] define the contract between the generic
//! engine and domain-specific problem implementations. The operator traits
//! ([`SelectionOperator`], [`CrossoverOperator`], [`MutationOperator`]) are
//! object safe so an engine can be assembled from interchangeable boxed
//! parts.

use rand::{Rng, RngCore};
use std::sync::Arc;

/// A candidate solution with a fixed-length objective vector.
///
/// All objectives are **minimized**. For maximization, negate the value
/// in [`Problem::evaluate`].
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct Route {
///     stops: Vec<usize>,
///     objectives: Vec<f64>,
/// }
///
/// impl Solution for Route {
///     fn objectives(&self) -> &[f64] { &self.objectives }
///     fn objectives_mut(&mut self) -> &mut [f64] { &mut self.objectives }
/// }
/// ```
pub trait Solution: Clone + Send + Sync {
    /// Returns the objective vector.
    fn objectives(&self) -> &[f64];

    /// Returns the objective vector for writing.
    fn objectives_mut(&mut self) -> &mut [f64];

    /// Number of objectives carried by this solution.
    fn number_of_objectives(&self) -> usize {
        self.objectives().len()
    }

    /// Returns objective `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    fn objective(&self, index: usize) -> f64 {
        self.objectives()[index]
    }

    /// Sets objective `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    fn set_objective(&mut self, index: usize, value: f64) {
        self.objectives_mut()[index] = value;
    }
}

/// Defines a multi-objective optimization problem.
///
/// # Thread Safety
///
/// `Problem` must be `Send + Sync` because an evaluator may evaluate
/// solutions in parallel.
pub trait Problem: Send + Sync {
    /// The solution type for this problem.
    type Solution: Solution;

    /// Number of objectives of every solution this problem creates.
    fn number_of_objectives(&self) -> usize;

    /// Creates a random solution.
    ///
    /// Returns `None` when the problem cannot produce a usable solution.
    fn create_solution<R: Rng>(&self, rng: &mut R) -> Option<Self::Solution>;

    /// Computes the objective vector of `solution` in place.
    ///
    /// Must be a pure function of the decision variables: the engine
    /// re-evaluates the final population before handing it out.
    fn evaluate(&self, solution: &mut Self::Solution) -> anyhow::Result<()>;
}

/// Picks one solution from a population to place in the mating pool.
///
/// Called once per mating-pool slot. Sampling is always done against the
/// population passed in; whether an individual can be picked twice is up
/// to the implementation.
pub trait SelectionOperator<S>: Send + Sync {
    /// Returns a human-readable name for this operator.
    fn name(&self) -> &str;

    /// Selects one solution.
    fn execute(&self, population: &[S], rng: &mut dyn RngCore) -> anyhow::Result<S>;
}

/// Recombines two parents into exactly two offspring.
pub trait CrossoverOperator<S>: Send + Sync {
    /// Returns a human-readable name for this operator.
    fn name(&self) -> &str;

    /// Produces two offspring from two parents.
    fn execute(&self, parents: [&S; 2], rng: &mut dyn RngCore) -> anyhow::Result<[S; 2]>;
}

/// Perturbs a solution in place.
pub trait MutationOperator<S>: Send + Sync {
    /// Returns a human-readable name for this operator.
    fn name(&self) -> &str;

    /// Mutates `solution`.
    fn execute(&self, solution: &mut S, rng: &mut dyn RngCore) -> anyhow::Result<()>;
}

/// A real-coded solution with per-variable bounds.
///
/// Bounds are shared between all copies of a solution, so cloning only
/// copies the variable and objective vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct RealSolution {
    /// Decision variables.
    pub variables: Vec<f64>,

    /// Objective values. Unevaluated solutions hold `f64::INFINITY`.
    pub objectives: Vec<f64>,

    bounds: Arc<[(f64, f64)]>,
}

impl RealSolution {
    /// Creates an unevaluated solution.
    ///
    /// # Panics
    /// Panics if `variables` and `bounds` have different lengths.
    pub fn new(variables: Vec<f64>, bounds: Arc<[(f64, f64)]>, number_of_objectives: usize) -> Self {
        assert_eq!(
            variables.len(),
            bounds.len(),
            "every variable needs a (lower, upper) bound"
        );
        Self {
            variables,
            objectives: vec![f64::INFINITY; number_of_objectives],
            bounds,
        }
    }

    /// Creates a solution with variables drawn uniformly within `bounds`.
    pub fn random<R: Rng + ?Sized>(
        bounds: Arc<[(f64, f64)]>,
        number_of_objectives: usize,
        rng: &mut R,
    ) -> Self {
        let variables = bounds
            .iter()
            .map(|&(lo, hi)| if hi > lo { rng.random_range(lo..=hi) } else { lo })
            .collect();
        Self::new(variables, bounds, number_of_objectives)
    }

    /// Per-variable `(lower, upper)` bounds.
    pub fn bounds(&self) -> &[(f64, f64)] {
        &self.bounds
    }

    /// Lower bound of variable `index`.
    pub fn lower_bound(&self, index: usize) -> f64 {
        self.bounds[index].0
    }

    /// Upper bound of variable `index`.
    pub fn upper_bound(&self, index: usize) -> f64 {
        self.bounds[index].1
    }
}

impl Solution for RealSolution {
    fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    fn objectives_mut(&mut self) -> &mut [f64] {
        &mut self.objectives
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn unit_bounds(n: usize) -> Arc<[(f64, f64)]> {
        vec![(0.0, 1.0); n].into()
    }

    #[test]
    fn test_new_is_unevaluated() {
        let s = RealSolution::new(vec![0.5, 0.25], unit_bounds(2), 3);
        assert_eq!(s.number_of_objectives(), 3);
        assert!(s.objectives.iter().all(|v| v.is_infinite()));
    }

    #[test]
    fn test_random_respects_bounds() {
        let bounds: Arc<[(f64, f64)]> = vec![(-1.0, 1.0), (10.0, 20.0), (3.0, 3.0)].into();
        let mut rng = create_rng(42);
        for _ in 0..500 {
            let s = RealSolution::random(bounds.clone(), 2, &mut rng);
            for (i, &x) in s.variables.iter().enumerate() {
                assert!(x >= s.lower_bound(i) && x <= s.upper_bound(i));
            }
        }
    }

    #[test]
    fn test_set_objective() {
        let mut s = RealSolution::new(vec![0.0], unit_bounds(1), 2);
        s.set_objective(1, 4.5);
        assert_eq!(s.objective(1), 4.5);
        assert!(s.objective(0).is_infinite());
    }

    #[test]
    fn test_clone_shares_bounds() {
        let s = RealSolution::new(vec![0.0, 1.0], unit_bounds(2), 1);
        let c = s.clone();
        assert!(std::ptr::eq(s.bounds().as_ptr(), c.bounds().as_ptr()));
    }

    #[test]
    #[should_panic(expected = "every variable needs")]
    fn test_bounds_length_mismatch_panics() {
        RealSolution::new(vec![0.0, 1.0], unit_bounds(1), 1);
    }
}
