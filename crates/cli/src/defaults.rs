//! Shared default values for the run command.
//! The reference scenario: 20 copies of an all-A genome mutating at 1%
//! per base per generation toward a half-G, half-C target.

pub const POPULATION_SIZE: usize = 20;
pub const GENERATIONS: usize = 1000;
pub const GENOME_LENGTH: usize = 100;
pub const MUTATION_RATE: f64 = 0.01;
