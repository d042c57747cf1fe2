//! Target-matching fitness.
//!
//! Fitness here is not a selection pressure (nothing reproduces); it is a
//! per-generation observation: the fraction of positions at which an
//! individual's sequence matches the fixed target sequence.

use crate::base::{FitnessValue, Nucleotide, Sequence, SharedSequence};
pub use crate::errors::FitnessError;

/// Scores sequences by their fraction of positions matching a fixed target.
#[derive(Debug, Clone)]
pub struct TargetFitness {
    target: SharedSequence,
}

impl TargetFitness {
    /// Create a new target fitness function.
    ///
    /// # Errors
    /// Returns `FitnessError::EmptyTarget` if the target has no bases (the
    /// match fraction would be undefined).
    pub fn new(target: SharedSequence) -> Result<Self, FitnessError> {
        if target.is_empty() {
            return Err(FitnessError::EmptyTarget);
        }
        Ok(Self { target })
    }

    /// The target sequence being matched against.
    pub fn target(&self) -> &SharedSequence {
        &self.target
    }

    /// Length of the target in bases.
    pub fn len(&self) -> usize {
        self.target.len()
    }

    /// Count positions at which two equal-length slices agree.
    fn matching_positions(seq: &[Nucleotide], target: &[Nucleotide]) -> usize {
        seq.iter().zip(target.iter()).filter(|(a, b)| a == b).count()
    }

    /// Score a sequence against the target.
    ///
    /// Returns the fraction of matching positions as a `FitnessValue` in
    /// [0.0, 1.0]; 1.0 means every base matches.
    ///
    /// # Errors
    /// Returns `FitnessError::LengthMismatch` if the sequence length differs
    /// from the target length.
    pub fn score(&self, sequence: &Sequence) -> Result<FitnessValue, FitnessError> {
        if sequence.len() != self.target.len() {
            return Err(FitnessError::LengthMismatch {
                sequence: sequence.len(),
                target: self.target.len(),
            });
        }

        let matches = Self::matching_positions(sequence.as_slice(), self.target.as_slice());
        Ok(FitnessValue::new(matches as f64 / self.target.len() as f64))
    }
}
