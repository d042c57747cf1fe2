//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use virevo_sim::prelude::*;
//!
//! let sim = SimulationBuilder::new()
//!     .population_size(5)
//!     .generations(10)
//!     .initial_uniform(Nucleotide::A, 4)
//!     .target_uniform(Nucleotide::T, 4)
//!     .mutation_rate(0.1)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! ```

pub use crate::base::{FitnessValue, Nucleotide, Sequence, SharedSequence};
pub use crate::errors;
pub use crate::evolution::{MutationModel, TargetFitness};
pub use crate::simulation::{
    ConvergencePolicy, ExecutionConfig, FitnessMatrix, Infection, Population, Simulation,
    SimulationBuilder, SimulationParameters,
};
