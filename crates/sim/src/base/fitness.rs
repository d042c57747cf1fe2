use std::fmt;

use serde::{Deserialize, Serialize};

/// A fitness value constrained to the range [0.0, 1.0].
///
/// In this simulation fitness is the fraction of positions at which an
/// individual's sequence matches the target, so 1.0 means full convergence
/// ("infection") and 0.0 means no position matches.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct FitnessValue(f64);

impl FitnessValue {
    /// Fitness of a fully converged individual.
    pub const CONVERGED: Self = Self(1.0);

    /// Creates a new FitnessValue, clamping the input to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the inner f64 value.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Returns true if this value represents a full match with the target.
    pub fn is_converged(self) -> bool {
        self.0 >= 1.0
    }
}

impl From<FitnessValue> for f64 {
    fn from(fitness: FitnessValue) -> Self {
        fitness.0
    }
}

impl From<f64> for FitnessValue {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for FitnessValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
