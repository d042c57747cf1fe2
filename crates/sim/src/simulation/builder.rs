//! Builder pattern for creating simulations.
//!
//! Provides a fluent API for configuring and creating simulations with
//! sensible defaults and comprehensive validation.

use crate::base::{Nucleotide, Sequence};
pub use crate::errors::BuilderError;
use crate::simulation::{
    ConvergencePolicy, ExecutionConfig, Simulation, SimulationParameters,
};

/// Builder for constructing Simulation instances with a fluent API.
///
/// # Examples
///
/// ```
/// use virevo_sim::simulation::SimulationBuilder;
/// use virevo_sim::base::Nucleotide;
///
/// // The reference scenario: all-A start, half-G half-C target
/// let sim = SimulationBuilder::new()
///     .population_size(20)
///     .generations(1000)
///     .initial_uniform(Nucleotide::A, 100)
///     .target_uniform(Nucleotide::G, 50)
///     .target_extend_uniform(Nucleotide::C, 50)
///     .mutation_rate(0.01)
///     .seed(42)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationBuilder {
    // Required parameters
    population_size: Option<usize>,
    generations: Option<usize>,
    initial: Option<Sequence>,
    target: Option<Sequence>,

    // Optional parameters (with defaults)
    mutation_rate: f64,                 // Default: 0.0 (no mutation)
    policy: ConvergencePolicy,          // Default: Freeze
    seed: Option<u64>,                  // Default: None (random)
}

impl SimulationBuilder {
    /// Create a new simulation builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the population size (required).
    pub fn population_size(mut self, size: usize) -> Self {
        self.population_size = Some(size);
        self
    }

    /// Set the number of generations to run (required).
    pub fn generations(mut self, generations: usize) -> Self {
        self.generations = Some(generations);
        self
    }

    /// Set the initial state every individual starts from (required, unless
    /// set via `initial_uniform`).
    pub fn initial_state(mut self, initial: Sequence) -> Self {
        self.initial = Some(initial);
        self
    }

    /// Set the target state individuals are scored against (required, unless
    /// set via `target_uniform`).
    pub fn target_state(mut self, target: Sequence) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the initial state to `len` copies of `base`.
    pub fn initial_uniform(mut self, base: Nucleotide, len: usize) -> Self {
        self.initial = Some(Sequence::uniform(base, len));
        self
    }

    /// Set the target state to `len` copies of `base`.
    pub fn target_uniform(mut self, base: Nucleotide, len: usize) -> Self {
        self.target = Some(Sequence::uniform(base, len));
        self
    }

    /// Append `len` copies of `base` to the target state (starting from an
    /// empty target if none is set). Useful for piecewise-uniform targets.
    pub fn target_extend_uniform(mut self, base: Nucleotide, len: usize) -> Self {
        let mut bases = self
            .target
            .take()
            .unwrap_or_default()
            .as_slice()
            .to_vec();
        bases.extend(std::iter::repeat(base).take(len));
        self.target = Some(Sequence::from_nucleotides(bases));
        self
    }

    /// Set the mutation rate (default: 0.0).
    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Set the convergence policy (default: `Freeze`).
    pub fn convergence_policy(mut self, policy: ConvergencePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the random seed for reproducibility (default: None = random).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build and validate the simulation.
    pub fn build(self) -> Result<Simulation, BuilderError> {
        let population_size = self
            .population_size
            .ok_or(BuilderError::MissingRequired("population_size"))?;
        let generations = self
            .generations
            .ok_or(BuilderError::MissingRequired("generations"))?;
        let initial = self
            .initial
            .ok_or(BuilderError::MissingRequired("initial_state"))?;
        let target = self
            .target
            .ok_or(BuilderError::MissingRequired("target_state"))?;

        let config = ExecutionConfig::new(population_size, generations, self.seed);
        let params = SimulationParameters::new(initial, target, self.mutation_rate)
            .with_policy(self.policy);

        Simulation::new(params, config).map_err(BuilderError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_builder_minimal() {
        let sim = SimulationBuilder::new()
            .population_size(10)
            .generations(50)
            .initial_uniform(Nucleotide::A, 8)
            .target_uniform(Nucleotide::G, 8)
            .build();

        assert!(sim.is_ok());
        let sim = sim.unwrap();
        assert_eq!(sim.population().size(), 10);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_builder_explicit_sequences() {
        let sim = SimulationBuilder::new()
            .population_size(2)
            .generations(5)
            .initial_state(Sequence::from_str("AATT").unwrap())
            .target_state(Sequence::from_str("GGCC").unwrap())
            .mutation_rate(0.1)
            .seed(42)
            .build();

        assert!(sim.is_ok());
    }

    #[test]
    fn test_builder_target_extend_uniform() {
        let sim = SimulationBuilder::new()
            .population_size(1)
            .generations(1)
            .initial_uniform(Nucleotide::A, 6)
            .target_uniform(Nucleotide::G, 3)
            .target_extend_uniform(Nucleotide::C, 3)
            .build()
            .unwrap();

        assert_eq!(sim.fitness().target().to_string(), "GGGCCC");
    }

    #[test]
    fn test_builder_missing_population_size() {
        let sim = SimulationBuilder::new()
            .generations(50)
            .initial_uniform(Nucleotide::A, 8)
            .target_uniform(Nucleotide::G, 8)
            .build();

        match sim.unwrap_err() {
            BuilderError::MissingRequired(param) => assert_eq!(param, "population_size"),
            other => panic!("Expected MissingRequired error, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_missing_generations() {
        let sim = SimulationBuilder::new()
            .population_size(10)
            .initial_uniform(Nucleotide::A, 8)
            .target_uniform(Nucleotide::G, 8)
            .build();

        match sim.unwrap_err() {
            BuilderError::MissingRequired(param) => assert_eq!(param, "generations"),
            other => panic!("Expected MissingRequired error, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_missing_sequences() {
        let sim = SimulationBuilder::new()
            .population_size(10)
            .generations(50)
            .build();

        match sim.unwrap_err() {
            BuilderError::MissingRequired(param) => assert_eq!(param, "initial_state"),
            other => panic!("Expected MissingRequired error, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_invalid_mutation_rate() {
        let sim = SimulationBuilder::new()
            .population_size(10)
            .generations(50)
            .initial_uniform(Nucleotide::A, 8)
            .target_uniform(Nucleotide::G, 8)
            .mutation_rate(-0.1)
            .build();

        assert!(matches!(sim.unwrap_err(), BuilderError::InvalidParameter(_)));
    }

    #[test]
    fn test_builder_length_mismatch() {
        let sim = SimulationBuilder::new()
            .population_size(10)
            .generations(50)
            .initial_uniform(Nucleotide::A, 8)
            .target_uniform(Nucleotide::G, 4)
            .build();

        assert!(matches!(sim.unwrap_err(), BuilderError::InvalidParameter(_)));
    }

    #[test]
    fn test_builder_with_policy() {
        let sim = SimulationBuilder::new()
            .population_size(10)
            .generations(50)
            .initial_uniform(Nucleotide::A, 8)
            .target_uniform(Nucleotide::G, 8)
            .convergence_policy(ConvergencePolicy::KeepMutating)
            .build()
            .unwrap();

        assert_eq!(sim.policy(), ConvergencePolicy::KeepMutating);
    }
}
