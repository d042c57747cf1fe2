//! Simulation parameters and configuration.
//!
//! This module provides the parameter structures for configuring a run:
//! execution settings (population size, generation count, seed), the
//! evolutionary parameters (initial state, target state, mutation rate),
//! and the policy applied when an individual fully converges.

use crate::base::Sequence;
use crate::errors::ParameterError;
use serde::{Deserialize, Serialize};

/// High-level execution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Number of individuals in the population
    pub population_size: usize,
    /// Total number of generations to simulate
    pub total_generations: usize,
    /// Optional RNG seed for reproducibility
    pub seed: Option<u64>,
}

impl ExecutionConfig {
    /// Create new execution settings.
    pub fn new(population_size: usize, total_generations: usize, seed: Option<u64>) -> Self {
        Self {
            population_size,
            total_generations,
            seed,
        }
    }
}

/// What happens to an individual after it fully matches the target.
///
/// The original formulation of this model was ambiguous here (it stopped
/// scoring a converged individual and left its later entries zero-filled).
/// Both policies below are explicit and leave no gaps in the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConvergencePolicy {
    /// Stop mutating a converged individual; its remaining matrix entries
    /// are recorded as 1.0.
    #[default]
    Freeze,
    /// Keep mutating a converged individual; it may drift away from the
    /// target again.
    KeepMutating,
}

/// Evolutionary parameters for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Sequence every individual starts from
    pub initial: Sequence,
    /// Target sequence individuals are scored against
    pub target: Sequence,
    /// Per-position, per-generation resampling probability
    pub mutation_rate: f64,
    /// Behavior once an individual reaches full convergence
    pub policy: ConvergencePolicy,
}

impl SimulationParameters {
    /// Create new parameters with the default (`Freeze`) convergence policy.
    pub fn new(initial: Sequence, target: Sequence, mutation_rate: f64) -> Self {
        Self {
            initial,
            target,
            mutation_rate,
            policy: ConvergencePolicy::default(),
        }
    }

    /// Set the convergence policy.
    pub fn with_policy(mut self, policy: ConvergencePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Check these parameters against `config`.
    ///
    /// Enforces the simulation preconditions: non-empty sequences of equal
    /// length, mutation rate in [0.0, 1.0], and positive population and
    /// generation counts.
    pub fn validate(&self, config: &ExecutionConfig) -> Result<(), ParameterError> {
        if self.initial.is_empty() {
            return Err(ParameterError::EmptySequence);
        }
        if self.initial.len() != self.target.len() {
            return Err(ParameterError::LengthMismatch {
                initial: self.initial.len(),
                target: self.target.len(),
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ParameterError::InvalidMutationRate(self.mutation_rate));
        }
        if config.population_size == 0 {
            return Err(ParameterError::ZeroPopulation);
        }
        if config.total_generations == 0 {
            return Err(ParameterError::ZeroGenerations);
        }
        Ok(())
    }
}
