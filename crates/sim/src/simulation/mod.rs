//! Simulation engine and population management.
//!
//! This module provides the core simulation loop: a `Population` of
//! sequences, the `Simulation` engine that mutates and scores it generation
//! by generation, the `FitnessMatrix` it fills in, and the configuration and
//! builder types used to set a run up.

pub mod builder;
pub mod engine;
pub mod matrix;
pub mod parameters;
pub mod population;

pub use builder::SimulationBuilder;
pub use engine::{Infection, Simulation};
pub use matrix::FitnessMatrix;
pub use parameters::{ConvergencePolicy, ExecutionConfig, SimulationParameters};
pub use population::Population;
