//! Generational loop execution.
//!
//! [`Moea`] owns the population and orchestrates the run:
//! initialization → evaluation → hook → (selection → reproduction →
//! evaluation → hook → replacement)* → result.
//!
//! Every step is also exposed on its own so a variant can drive the loop
//! itself.

use super::config::{MoeaConfig, ParentSource};
use super::evaluator::{Evaluator, SequentialEvaluator};
use super::hook::{GenerationHook, TrackReferencePoints};
use super::reference_point::ReferencePoints;
use super::replacement::{RankingAndCrowdingReplacement, Replacement};
use super::selection::BinaryTournamentSelection;
use super::types::{CrossoverOperator, MutationOperator, Problem, SelectionOperator, Solution};
use crate::error::{MoeaError, Result};
use crate::random::{distinct_pair, rng_from_seed};
use rand::rngs::StdRng;
use rand::RngCore;
use tracing::instrument;

/// Position of the engine in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    Evaluated,
    Select,
    Reproduce,
    EvaluateOffspring,
    AlgorithmHook,
    Replace,
    CheckStop,
    Terminated,
}

/// A generational multi-objective evolutionary engine.
///
/// Assembled from interchangeable parts with [`MoeaBuilder`].
///
/// # Usage
///
/// ```ignore
/// let mut moea = Moea::builder(problem)
///     .config(MoeaConfig::default().with_seed(42))
///     .crossover(SbxCrossover::default())
///     .mutation(PolynomialMutation::default())
///     .build()?;
/// moea.run()?;
/// let front = moea.result()?;
/// ```
pub struct Moea<P: Problem, R = StdRng> {
    problem: P,
    config: MoeaConfig,
    evaluator: Box<dyn Evaluator<P>>,
    selection: Box<dyn SelectionOperator<P::Solution>>,
    crossover: Box<dyn CrossoverOperator<P::Solution>>,
    mutation: Box<dyn MutationOperator<P::Solution>>,
    replacement: Box<dyn Replacement<P::Solution>>,
    hook: Box<dyn GenerationHook<P::Solution>>,
    rng: R,
    population: Vec<P::Solution>,
    points: ReferencePoints,
    generation: usize,
    phase: Phase,
}

impl<P: Problem> Moea<P> {
    /// Starts assembling an engine for `problem`.
    pub fn builder(problem: P) -> MoeaBuilder<P> {
        MoeaBuilder::new(problem)
    }
}

impl<P: Problem, R: RngCore> Moea<P, R> {
    /// Runs the whole generational loop.
    ///
    /// Errors from the problem, the evaluator, any operator or the hook
    /// abort the run and are returned unchanged.
    #[instrument(
        level = "debug",
        skip(self),
        fields(
            population_size = self.config.population_size,
            max_generations = self.config.max_generations
        )
    )]
    pub fn run(&mut self) -> Result<()> {
        tracing::info!(
            selection = self.selection.name(),
            crossover = self.crossover.name(),
            mutation = self.mutation.name(),
            replacement = self.replacement.name(),
            "Starting run"
        );

        self.set_phase(Phase::Init);
        let initial = self.create_initial_population()?;
        self.population = self.evaluate_population(initial)?;
        self.set_phase(Phase::Evaluated);
        self.init_progress();
        self.hook.after_evaluation(&self.population, &mut self.points)?;

        while !self.is_stopping_condition_reached() {
            let current = std::mem::take(&mut self.population);
            let offspring = match self.breed(&current) {
                Ok(offspring) => offspring,
                Err(err) => {
                    self.population = current;
                    return Err(err);
                }
            };

            self.set_phase(Phase::Replace);
            self.population = self.replacement(current, offspring);

            self.set_phase(Phase::CheckStop);
            self.update_progress();
            tracing::debug!(
                generation = self.generation,
                utopia = ?self.points.utopia(),
                "Generation completed"
            );
        }

        self.set_phase(Phase::Terminated);
        tracing::info!(
            generations = self.generations_run(),
            utopia = ?self.points.utopia(),
            nadir = ?self.points.nadir(),
            "Run finished"
        );
        Ok(())
    }

    /// Selection, reproduction, offspring evaluation and hook for one
    /// generation.
    fn breed(&mut self, current: &[P::Solution]) -> Result<Vec<P::Solution>> {
        self.set_phase(Phase::Select);
        let mating_pool = self.selection(current)?;

        self.set_phase(Phase::Reproduce);
        let offspring = self.reproduction(current, &mating_pool)?;

        self.set_phase(Phase::EvaluateOffspring);
        let offspring = self.evaluate_population(offspring)?;

        self.set_phase(Phase::AlgorithmHook);
        self.hook.after_evaluation(&offspring, &mut self.points)?;
        Ok(offspring)
    }

    fn set_phase(&mut self, phase: Phase) {
        tracing::trace!(from = ?self.phase, to = ?phase, "Phase change");
        self.phase = phase;
    }

    /// Calls the problem's factory `population_size` times.
    ///
    /// Fails with [`MoeaError::InvalidState`] if fewer usable solutions
    /// were produced.
    pub fn create_initial_population(&mut self) -> Result<Vec<P::Solution>> {
        let size = self.config.population_size;
        let population: Vec<P::Solution> = (0..size)
            .filter_map(|_| self.problem.create_solution(&mut self.rng))
            .collect();

        if population.len() < size {
            tracing::warn!(
                requested = size,
                produced = population.len(),
                "Problem under-filled the initial population"
            );
            return Err(MoeaError::InvalidState(format!(
                "problem produced {} usable solutions, {size} requested",
                population.len()
            )));
        }
        Ok(population)
    }

    /// Evaluates `population` through the evaluator.
    ///
    /// Fails with [`MoeaError::InvalidState`] if the evaluator returns a
    /// population of a different length.
    pub fn evaluate_population(&self, population: Vec<P::Solution>) -> Result<Vec<P::Solution>> {
        let expected = population.len();
        let evaluated = self.evaluator.evaluate(population, &self.problem)?;
        if evaluated.len() != expected {
            return Err(MoeaError::InvalidState(format!(
                "evaluator returned {} solutions for {expected}",
                evaluated.len()
            )));
        }
        Ok(evaluated)
    }

    /// Sets the generation counter to 1.
    pub fn init_progress(&mut self) {
        self.generation = 1;
    }

    /// Advances the generation counter by one.
    pub fn update_progress(&mut self) {
        self.generation += 1;
    }

    /// `true` once the counter reaches `max_generations`.
    pub fn is_stopping_condition_reached(&self) -> bool {
        self.generation >= self.config.max_generations
    }

    /// Builds a mating pool of `population_size` solutions, calling the
    /// selection operator once per slot.
    pub fn selection(&mut self, population: &[P::Solution]) -> Result<Vec<P::Solution>> {
        let mut pool = Vec::with_capacity(self.config.population_size);
        for _ in 0..self.config.population_size {
            pool.push(self.selection.execute(population, &mut self.rng)?);
        }
        Ok(pool)
    }

    /// Produces `population_size` offspring, two at a time.
    ///
    /// Each pair of parents is two distinct indices drawn uniformly from
    /// `population` or from `mating_pool`, depending on
    /// [`MoeaConfig::parent_source`]. Both children are mutated in place.
    pub fn reproduction(
        &mut self,
        population: &[P::Solution],
        mating_pool: &[P::Solution],
    ) -> Result<Vec<P::Solution>> {
        let parents = match self.config.parent_source {
            ParentSource::Population => population,
            ParentSource::MatingPool => mating_pool,
        };
        if parents.len() < 2 {
            return Err(MoeaError::InvalidState(format!(
                "reproduction needs at least two parents, got {}",
                parents.len()
            )));
        }

        let size = self.config.population_size;
        let mut offspring = Vec::with_capacity(size);
        while offspring.len() < size {
            let (i, j) = distinct_pair(parents.len(), &mut self.rng);
            let [mut first, mut second] =
                self.crossover.execute([&parents[i], &parents[j]], &mut self.rng)?;
            self.mutation.execute(&mut first, &mut self.rng)?;
            self.mutation.execute(&mut second, &mut self.rng)?;
            offspring.push(first);
            offspring.push(second);
        }
        Ok(offspring)
    }

    /// Hands `current` and `offspring` to the replacement strategy.
    pub fn replacement(
        &self,
        current: Vec<P::Solution>,
        offspring: Vec<P::Solution>,
    ) -> Vec<P::Solution> {
        let expected = current.len();
        let next = self.replacement.replace(current, offspring);
        debug_assert_eq!(next.len(), expected, "replacement changed the population size");
        next
    }

    /// Re-evaluates the current population and returns it.
    ///
    /// On failure the population is left as it was before the call.
    pub fn result(&mut self) -> Result<&[P::Solution]> {
        self.population = self.evaluate_population(self.population.clone())?;
        Ok(&self.population)
    }

    /// The current population.
    pub fn population(&self) -> &[P::Solution] {
        &self.population
    }

    /// Replaces the current population.
    pub fn set_population(&mut self, population: Vec<P::Solution>) {
        self.population = population;
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn config(&self) -> &MoeaConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current value of the generation counter.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Number of completed generations after the initial evaluation.
    pub fn generations_run(&self) -> usize {
        self.generation.saturating_sub(1)
    }

    pub fn reference_points(&self) -> &ReferencePoints {
        &self.points
    }

    pub fn utopia_point(&self) -> &[f64] {
        self.points.utopia()
    }

    pub fn nadir_point(&self) -> &[f64] {
        self.points.nadir()
    }

    /// Elementwise minimum of the utopia point and `solution`.
    pub fn update_utopia_point(&mut self, solution: &P::Solution) {
        self.points.update_utopia(solution.objectives());
    }

    /// Elementwise maximum of the nadir point and `solution`.
    pub fn update_nadir_point(&mut self, solution: &P::Solution) {
        self.points.update_nadir(solution.objectives());
    }

    pub fn update_utopia_point_from(&mut self, population: &[P::Solution]) {
        self.points.update_utopia_from(population);
    }

    pub fn update_nadir_point_from(&mut self, population: &[P::Solution]) {
        self.points.update_nadir_from(population);
    }

    /// Overwrites utopia component `index`.
    ///
    /// Fails with [`MoeaError::OutOfRange`] when `index` is not below the
    /// objective count.
    pub fn set_utopia_point_value(&mut self, index: usize, value: f64) -> Result<()> {
        self.points.set_utopia_value(index, value)
    }

    /// Overwrites nadir component `index`.
    pub fn set_nadir_point_value(&mut self, index: usize, value: f64) -> Result<()> {
        self.points.set_nadir_value(index, value)
    }
}

/// Assembles a [`Moea`] from its parts.
///
/// Crossover and mutation are required. The other parts default to
/// [`SequentialEvaluator`], [`BinaryTournamentSelection`],
/// [`RankingAndCrowdingReplacement`] and [`TrackReferencePoints`]; the
/// generator defaults to a [`StdRng`] seeded from [`MoeaConfig::seed`].
pub struct MoeaBuilder<P: Problem, R = StdRng> {
    problem: P,
    config: MoeaConfig,
    evaluator: Option<Box<dyn Evaluator<P>>>,
    selection: Option<Box<dyn SelectionOperator<P::Solution>>>,
    crossover: Option<Box<dyn CrossoverOperator<P::Solution>>>,
    mutation: Option<Box<dyn MutationOperator<P::Solution>>>,
    replacement: Option<Box<dyn Replacement<P::Solution>>>,
    hook: Option<Box<dyn GenerationHook<P::Solution>>>,
    /// Builds the generator from the configured seed at `build` time.
    rng: Box<dyn FnOnce(Option<u64>) -> R>,
}

impl<P: Problem> MoeaBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            config: MoeaConfig::default(),
            evaluator: None,
            selection: None,
            crossover: None,
            mutation: None,
            replacement: None,
            hook: None,
            rng: Box::new(rng_from_seed),
        }
    }
}

impl<P: Problem, R> MoeaBuilder<P, R> {
    pub fn config(mut self, config: MoeaConfig) -> Self {
        self.config = config;
        self
    }

    pub fn evaluator(mut self, evaluator: impl Evaluator<P> + 'static) -> Self {
        self.evaluator = Some(Box::new(evaluator));
        self
    }

    pub fn selection(mut self, selection: impl SelectionOperator<P::Solution> + 'static) -> Self {
        self.selection = Some(Box::new(selection));
        self
    }

    pub fn crossover(mut self, crossover: impl CrossoverOperator<P::Solution> + 'static) -> Self {
        self.crossover = Some(Box::new(crossover));
        self
    }

    pub fn mutation(mut self, mutation: impl MutationOperator<P::Solution> + 'static) -> Self {
        self.mutation = Some(Box::new(mutation));
        self
    }

    pub fn replacement(mut self, replacement: impl Replacement<P::Solution> + 'static) -> Self {
        self.replacement = Some(Box::new(replacement));
        self
    }

    pub fn hook(mut self, hook: impl GenerationHook<P::Solution> + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    /// Injects the random number generator, overriding the seed.
    ///
    /// Any [`RngCore`] works; it does not need to be seedable.
    pub fn rng<R2: 'static>(self, rng: R2) -> MoeaBuilder<P, R2> {
        MoeaBuilder {
            problem: self.problem,
            config: self.config,
            evaluator: self.evaluator,
            selection: self.selection,
            crossover: self.crossover,
            mutation: self.mutation,
            replacement: self.replacement,
            hook: self.hook,
            rng: Box::new(move |_| rng),
        }
    }

    /// Validates the configuration and builds the engine.
    ///
    /// Fails with [`MoeaError::InvalidConfig`] if the configuration is
    /// invalid, crossover or mutation is missing, or the replacement
    /// strategy does not fit the problem's objective count.
    pub fn build(self) -> Result<Moea<P, R>>
    where
        R: RngCore,
    {
        self.config.validate()?;
        let objectives = self.problem.number_of_objectives();

        let crossover = self
            .crossover
            .ok_or_else(|| MoeaError::InvalidConfig("a crossover operator is required".into()))?;
        let mutation = self
            .mutation
            .ok_or_else(|| MoeaError::InvalidConfig("a mutation operator is required".into()))?;
        let replacement = self
            .replacement
            .unwrap_or_else(|| Box::new(RankingAndCrowdingReplacement));
        replacement.check_objectives(objectives)?;
        let rng = (self.rng)(self.config.seed);

        Ok(Moea {
            evaluator: self.evaluator.unwrap_or_else(|| Box::new(SequentialEvaluator)),
            selection: self
                .selection
                .unwrap_or_else(|| Box::new(BinaryTournamentSelection)),
            crossover,
            mutation,
            replacement,
            hook: self.hook.unwrap_or_else(|| Box::new(TrackReferencePoints)),
            rng,
            problem: self.problem,
            config: self.config,
            population: Vec::new(),
            points: ReferencePoints::new(objectives),
            generation: 0,
            phase: Phase::Init,
        })
    }
}
