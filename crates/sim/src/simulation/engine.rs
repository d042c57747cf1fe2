//! Simulation engine for the mutation-and-scoring loop.
//!
//! One `step` is one generation: every individual is mutated in place and
//! then scored against the target, in index order, with a single
//! sequentially-consumed RNG. Runs with the same seed therefore produce
//! identical fitness matrices.

use crate::errors::SimulationError;
use crate::evolution::{MutationModel, TargetFitness};
use crate::simulation::{
    ConvergencePolicy, ExecutionConfig, FitnessMatrix, Population, SimulationParameters,
};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;

/// A full-convergence event: `individual` first matched the target at every
/// position after `generation`'s mutation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Infection {
    /// Index of the converged individual
    pub individual: usize,
    /// Generation (0-based) at which it converged
    pub generation: usize,
}

/// Main simulation engine.
#[derive(Debug)]
pub struct Simulation {
    /// Current population
    population: Population,
    /// Target-matching fitness function
    fitness: TargetFitness,
    /// Point mutation model
    mutation: MutationModel,
    /// Policy applied once an individual fully converges
    policy: ConvergencePolicy,
    /// Execution settings
    config: ExecutionConfig,
    /// Random number generator (Xoshiro256++ for speed and reproducibility)
    rng: Xoshiro256PlusPlus,
    /// Per-generation, per-individual scores
    matrix: FitnessMatrix,
    /// Generation at which each individual first converged
    converged_at: Vec<Option<usize>>,
    /// All convergence events so far, in occurrence order
    infections: Vec<Infection>,
}

impl Simulation {
    /// Create a new simulation.
    ///
    /// Validates `params` against `config` and sets up the initial
    /// population, scoring function, and RNG.
    ///
    /// # Errors
    /// Returns `SimulationError::Parameter` if the parameters violate the
    /// preconditions (see [`SimulationParameters::validate`]).
    pub fn new(
        params: SimulationParameters,
        config: ExecutionConfig,
    ) -> Result<Self, SimulationError> {
        params.validate(&config)?;

        // Validation guarantees the rate is in range and the target is
        // non-empty, so these constructors cannot fail here.
        let mutation = MutationModel::new(params.mutation_rate)
            .map_err(|_| crate::errors::ParameterError::InvalidMutationRate(params.mutation_rate))?;
        let fitness = TargetFitness::new(params.target.to_shared())?;

        let rng = match config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        };

        let population = Population::from_initial("pop0", &params.initial, config.population_size);
        let matrix = FitnessMatrix::new(config.population_size, config.total_generations);
        let converged_at = vec![None; config.population_size];

        Ok(Self {
            population,
            fitness,
            mutation,
            policy: params.policy,
            config,
            rng,
            matrix,
            converged_at,
            infections: Vec::new(),
        })
    }

    /// Get the current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Get the current generation number (generations completed so far).
    pub fn generation(&self) -> usize {
        self.population.generation()
    }

    /// Get reference to the execution settings.
    pub fn config(&self) -> &ExecutionConfig {
        &self.config
    }

    /// Get reference to the mutation model.
    pub fn mutation(&self) -> &MutationModel {
        &self.mutation
    }

    /// Get the convergence policy in effect.
    pub fn policy(&self) -> ConvergencePolicy {
        self.policy
    }

    /// Get reference to the target fitness function.
    pub fn fitness(&self) -> &TargetFitness {
        &self.fitness
    }

    /// Get the fitness matrix filled in so far.
    pub fn fitness_matrix(&self) -> &FitnessMatrix {
        &self.matrix
    }

    /// All convergence events so far, in occurrence order.
    pub fn infections(&self) -> &[Infection] {
        &self.infections
    }

    /// Number of individuals that have fully converged at least once.
    pub fn converged_count(&self) -> usize {
        self.converged_at.iter().filter(|c| c.is_some()).count()
    }

    /// True once the configured number of generations has run.
    pub fn is_complete(&self) -> bool {
        self.generation() >= self.config.total_generations
    }

    /// Advance the simulation by one generation.
    ///
    /// For each individual in index order: mutate in place, score against
    /// the target, and record the score at (individual, generation). Scoring
    /// happens after mutation, so column 0 reflects the population after one
    /// mutation pass. Under the `Freeze` policy a converged individual skips
    /// mutation and its entry is recorded as 1.0.
    ///
    /// # Returns
    /// The convergence events that occurred this generation, in individual
    /// order.
    ///
    /// # Errors
    /// Returns `SimulationError::Finished` if the configured generations are
    /// already exhausted.
    pub fn step(&mut self) -> Result<Vec<Infection>, SimulationError> {
        let generation = self.population.generation();
        if generation >= self.config.total_generations {
            return Err(SimulationError::Finished {
                total_generations: self.config.total_generations,
            });
        }

        let mut events = Vec::new();

        for i in 0..self.population.size() {
            let frozen =
                self.policy == ConvergencePolicy::Freeze && self.converged_at[i].is_some();
            if frozen {
                self.matrix.set(i, generation, 1.0)?;
                continue;
            }

            self.mutation
                .mutate_sequence(&mut self.population.individuals_mut()[i], &mut self.rng);

            let value = self.fitness.score(&self.population.individuals()[i])?;
            self.matrix.set(i, generation, value.get())?;

            if value.is_converged() && self.converged_at[i].is_none() {
                self.converged_at[i] = Some(generation);
                events.push(Infection {
                    individual: i,
                    generation,
                });
            }
        }

        self.population.increment_generation();
        self.infections.extend_from_slice(&events);

        Ok(events)
    }

    /// Run the simulation to completion.
    ///
    /// # Returns
    /// All convergence events from the remaining generations, in occurrence
    /// order.
    pub fn run(&mut self) -> Result<Vec<Infection>, SimulationError> {
        let mut events = Vec::new();
        while !self.is_complete() {
            events.extend(self.step()?);
        }
        Ok(events)
    }

    /// Run the simulation for up to `generations` further generations,
    /// stopping early if the configured total is reached.
    pub fn run_for(&mut self, generations: usize) -> Result<Vec<Infection>, SimulationError> {
        let mut events = Vec::new();
        for _ in 0..generations {
            if self.is_complete() {
                break;
            }
            events.extend(self.step()?);
        }
        Ok(events)
    }
}
