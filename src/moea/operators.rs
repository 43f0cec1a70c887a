//! Reference variation operators for real-coded solutions.
//!
//! - [`SbxCrossover`]: simulated binary crossover, bounded
//! - [`PolynomialMutation`]: polynomial mutation, bounded
//!
//! # References
//!
//! - Deb & Agrawal (1995), "Simulated Binary Crossover for Continuous Search Space"
//! - Deb & Goyal (1996), "A Combined Genetic Adaptive Search (GeneAS) for
//!   Engineering Design"

use super::types::{CrossoverOperator, MutationOperator, RealSolution};
use rand::{Rng, RngCore};

/// Parents closer than this on a variable are copied unchanged.
const EPS: f64 = 1.0e-14;

/// Simulated binary crossover (SBX).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SbxCrossover {
    probability: f64,
    distribution_index: f64,
}

impl Default for SbxCrossover {
    fn default() -> Self {
        Self::new(0.9, 20.0)
    }
}

impl SbxCrossover {
    /// Creates the operator. `probability` is clamped to `[0, 1]`, the
    /// distribution index to be non-negative.
    pub fn new(probability: f64, distribution_index: f64) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
            distribution_index: distribution_index.max(0.0),
        }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn distribution_index(&self) -> f64 {
        self.distribution_index
    }

    /// Spread factor for one side of the parent interval.
    fn beta_q(&self, beta: f64, u: f64) -> f64 {
        let exponent = self.distribution_index + 1.0;
        let alpha = 2.0 - beta.powf(-exponent);
        if u <= 1.0 / alpha {
            (u * alpha).powf(1.0 / exponent)
        } else {
            (1.0 / (2.0 - u * alpha)).powf(1.0 / exponent)
        }
    }
}

impl CrossoverOperator<RealSolution> for SbxCrossover {
    fn name(&self) -> &str {
        "SBX"
    }

    fn execute(
        &self,
        parents: [&RealSolution; 2],
        rng: &mut dyn RngCore,
    ) -> anyhow::Result<[RealSolution; 2]> {
        let [p1, p2] = parents;
        anyhow::ensure!(
            p1.variables.len() == p2.variables.len(),
            "parents have {} and {} variables",
            p1.variables.len(),
            p2.variables.len()
        );

        let mut c1 = p1.clone();
        let mut c2 = p2.clone();
        if rng.random::<f64>() > self.probability {
            return Ok([c1, c2]);
        }

        for i in 0..p1.variables.len() {
            let x1 = p1.variables[i];
            let x2 = p2.variables[i];
            if rng.random_bool(0.5) || (x1 - x2).abs() <= EPS {
                continue;
            }

            let (lb, ub) = (p1.lower_bound(i), p1.upper_bound(i));
            let (y1, y2) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
            let spread = y2 - y1;
            let u: f64 = rng.random();

            let bq = self.beta_q(1.0 + 2.0 * (y1 - lb) / spread, u);
            let low = (0.5 * (y1 + y2 - bq * spread)).clamp(lb, ub);

            let bq = self.beta_q(1.0 + 2.0 * (ub - y2) / spread, u);
            let high = (0.5 * (y1 + y2 + bq * spread)).clamp(lb, ub);

            if rng.random_bool(0.5) {
                c1.variables[i] = high;
                c2.variables[i] = low;
            } else {
                c1.variables[i] = low;
                c2.variables[i] = high;
            }
        }

        Ok([c1, c2])
    }
}

/// Polynomial mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolynomialMutation {
    probability: Option<f64>,
    distribution_index: f64,
}

impl Default for PolynomialMutation {
    fn default() -> Self {
        Self {
            probability: None,
            distribution_index: 20.0,
        }
    }
}

impl PolynomialMutation {
    /// Creates the operator with a fixed per-variable probability.
    pub fn new(probability: f64, distribution_index: f64) -> Self {
        Self {
            probability: Some(probability.clamp(0.0, 1.0)),
            distribution_index: distribution_index.max(0.0),
        }
    }

    /// Per-variable probability of `1 / n` for `n` variables.
    pub fn per_variable(distribution_index: f64) -> Self {
        Self {
            probability: None,
            distribution_index: distribution_index.max(0.0),
        }
    }

    fn probability_for(&self, n: usize) -> f64 {
        self.probability.unwrap_or(1.0 / n.max(1) as f64)
    }
}

impl MutationOperator<RealSolution> for PolynomialMutation {
    fn name(&self) -> &str {
        "polynomial"
    }

    fn execute(&self, solution: &mut RealSolution, rng: &mut dyn RngCore) -> anyhow::Result<()> {
        let p = self.probability_for(solution.variables.len());
        let exponent = self.distribution_index + 1.0;

        for i in 0..solution.variables.len() {
            if rng.random::<f64>() > p {
                continue;
            }
            let (lb, ub) = (solution.lower_bound(i), solution.upper_bound(i));
            if ub <= lb {
                solution.variables[i] = lb;
                continue;
            }

            let y = solution.variables[i];
            let range = ub - lb;
            let u: f64 = rng.random();

            let delta_q = if u <= 0.5 {
                let xy = 1.0 - (y - lb) / range;
                let val = 2.0 * u + (1.0 - 2.0 * u) * xy.powf(exponent);
                val.powf(1.0 / exponent) - 1.0
            } else {
                let xy = 1.0 - (ub - y) / range;
                let val = 2.0 * (1.0 - u) + 2.0 * (u - 0.5) * xy.powf(exponent);
                1.0 - val.powf(1.0 / exponent)
            };

            solution.variables[i] = (y + delta_q * range).clamp(lb, ub);
        }
        Ok(())
    }
}
