//! Engine configuration.
//!
//! [`MoeaConfig`] holds the parameters that control the generational loop.

use crate::error::{MoeaError, Result};

/// Where reproduction draws its parent pairs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParentSource {
    /// Draw both parents uniformly from the current population, ignoring
    /// the mating pool built by selection.
    #[default]
    Population,

    /// Draw both parents uniformly from the mating pool.
    MatingPool,
}

/// Configuration for the evolutionary engine.
///
/// # Defaults
///
/// ```
/// use u_moea::moea::{MoeaConfig, ParentSource};
///
/// let config = MoeaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 250);
/// assert_eq!(config.parent_source, ParentSource::Population);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_moea::moea::{MoeaConfig, ParentSource};
///
/// let config = MoeaConfig::default()
///     .with_population_size(92)
///     .with_max_generations(400)
///     .with_parent_source(ParentSource::MatingPool)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MoeaConfig {
    /// Number of solutions in the population.
    ///
    /// Must be even and at least 2: offspring are produced in pairs from
    /// two distinct parents.
    pub population_size: usize,

    /// Value of the generation counter at which the run stops.
    ///
    /// The counter is 1 after the initial evaluation, so the loop body
    /// runs `max_generations - 1` times (zero times for 0 or 1).
    pub max_generations: usize,

    /// Where reproduction draws parents from.
    pub parent_source: ParentSource,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from fresh entropy. Ignored when a generator is
    /// injected through the builder.
    pub seed: Option<u64>,
}

impl Default for MoeaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 250,
            parent_source: ParentSource::default(),
            seed: None,
        }
    }
}

impl MoeaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum generation counter.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the parent source used by reproduction.
    pub fn with_parent_source(mut self, source: ParentSource) -> Self {
        self.parent_source = source;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(MoeaError::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if self.population_size % 2 != 0 {
            return Err(MoeaError::InvalidConfig(format!(
                "population_size must be even, got {}",
                self.population_size
            )));
        }
        Ok(())
    }

    /// Number of generations the loop body will execute.
    pub fn generations_to_run(&self) -> usize {
        self.max_generations.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MoeaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 250);
        assert_eq!(config.parent_source, ParentSource::Population);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MoeaConfig::default()
            .with_population_size(40)
            .with_max_generations(10)
            .with_parent_source(ParentSource::MatingPool)
            .with_seed(42);

        assert_eq!(config.population_size, 40);
        assert_eq!(config.max_generations, 10);
        assert_eq!(config.parent_source, ParentSource::MatingPool);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_population_too_small() {
        for n in [0, 1] {
            let err = MoeaConfig::default().with_population_size(n).validate();
            assert!(matches!(err, Err(MoeaError::InvalidConfig(_))), "n = {n}");
        }
    }

    #[test]
    fn test_validate_odd_population() {
        let err = MoeaConfig::default().with_population_size(7).validate();
        assert!(matches!(err, Err(MoeaError::InvalidConfig(msg)) if msg.contains("even")));
    }

    #[test]
    fn test_zero_generations_is_valid() {
        let config = MoeaConfig::default().with_max_generations(0);
        assert!(config.validate().is_ok());
        assert_eq!(config.generations_to_run(), 0);
    }

    #[test]
    fn test_generations_to_run() {
        assert_eq!(MoeaConfig::default().with_max_generations(1).generations_to_run(), 0);
        assert_eq!(MoeaConfig::default().with_max_generations(5).generations_to_run(), 4);
    }
}
