//! Evolution module providing mutation and fitness scoring.
//!
//! This simulation has exactly two evolutionary ingredients:
//! - **Mutation**: per-position uniform resampling at a fixed rate
//! - **Fitness**: fraction of positions matching a target sequence
//!
//! There is deliberately no recombination, reproduction, or selection.

pub mod fitness;
pub mod mutation;

pub use fitness::TargetFitness;
pub use mutation::MutationModel;
