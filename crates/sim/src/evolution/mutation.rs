//! Mutation operations for sequences.
//!
//! The mutation process is intentionally simple: each position, independently
//! and once per generation, is resampled with probability `rate`. Resampling
//! draws uniformly from the full four-letter alphabet, so a base can be
//! "replaced" by itself; the effective per-position change probability is
//! `rate * 3/4`. There is no per-pair substitution matrix and there are no
//! indels, so sequence length never changes.

use crate::base::{Nucleotide, Sequence};
pub use crate::errors::MutationError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Uniform-resampling point mutation model.
///
/// `rate` is the per-position, per-generation probability that a base is
/// replaced with a uniformly random base from {A, C, G, T}.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MutationModel {
    rate: f64,
}

impl MutationModel {
    /// Create a new mutation model.
    ///
    /// # Errors
    /// Returns `MutationError::InvalidMutationRate` if `rate` is outside
    /// [0.0, 1.0] (NaN included).
    pub fn new(rate: f64) -> Result<Self, MutationError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(MutationError::InvalidMutationRate(rate));
        }
        Ok(Self { rate })
    }

    /// The per-position resampling probability.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Mutate a single base.
    ///
    /// With probability `rate` the base is resampled uniformly from the
    /// alphabet (self-replacement possible); otherwise it is returned
    /// unchanged.
    #[inline]
    pub fn mutate_base<R: Rng + ?Sized>(&self, base: Nucleotide, rng: &mut R) -> Nucleotide {
        if rng.random::<f64>() < self.rate {
            Nucleotide::sample(rng)
        } else {
            base
        }
    }

    /// Mutate a sequence in place.
    ///
    /// Each position is considered independently, in order, so the result is
    /// deterministic for a given RNG state. The sequence length is unchanged.
    ///
    /// # Returns
    /// The number of resampling events (which can exceed the number of
    /// visible changes, since resampling may redraw the same base).
    pub fn mutate_sequence<R: Rng + ?Sized>(&self, sequence: &mut Sequence, rng: &mut R) -> usize {
        let mut resampled = 0;
        for slot in sequence.as_mut_slice() {
            if rng.random::<f64>() < self.rate {
                *slot = Nucleotide::sample(rng);
                resampled += 1;
            }
        }
        resampled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::str::FromStr;

    #[test]
    fn test_mutation_model_new() {
        assert!(MutationModel::new(0.0).is_ok());
        assert!(MutationModel::new(0.5).is_ok());
        assert!(MutationModel::new(1.0).is_ok());
    }

    #[test]
    fn test_mutation_model_invalid_rate() {
        assert!(MutationModel::new(-0.1).is_err());
        assert!(MutationModel::new(1.5).is_err());
        assert!(MutationModel::new(f64::NAN).is_err());

        let err = MutationModel::new(1.5).unwrap_err();
        assert_eq!(err, MutationError::InvalidMutationRate(1.5));
    }

    #[test]
    fn test_mutate_base_zero_rate() {
        let model = MutationModel::new(0.0).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        for _ in 0..100 {
            assert_eq!(model.mutate_base(Nucleotide::A, &mut rng), Nucleotide::A);
        }
    }

    #[test]
    fn test_mutate_base_full_rate_allows_self_replacement() {
        let model = MutationModel::new(1.0).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        let mut counts = [0usize; 4];
        for _ in 0..4000 {
            counts[model.mutate_base(Nucleotide::A, &mut rng).to_index() as usize] += 1;
        }

        // Uniform resampling: A should reappear about a quarter of the time,
        // unlike a substitution matrix with a zero diagonal.
        for &count in &counts {
            assert!(count > 800, "counts: {counts:?}");
            assert!(count < 1200, "counts: {counts:?}");
        }
    }

    #[test]
    fn test_mutate_sequence_zero_rate() {
        let model = MutationModel::new(0.0).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        let mut seq = Sequence::from_str("ACGTACGT").unwrap();
        let original = seq.to_string();

        let count = model.mutate_sequence(&mut seq, &mut rng);

        assert_eq!(count, 0);
        assert_eq!(seq.to_string(), original);
    }

    #[test]
    fn test_mutate_sequence_full_rate_resamples_everything() {
        let model = MutationModel::new(1.0).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        let mut seq = Sequence::from_str("ACGTACGTACGTACGT").unwrap();
        let count = model.mutate_sequence(&mut seq, &mut rng);

        assert_eq!(count, seq.len());
    }

    #[test]
    fn test_mutate_sequence_preserves_length() {
        let model = MutationModel::new(0.5).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);

        let mut seq = Sequence::from_str("ACGT".repeat(25).as_str()).unwrap();
        for _ in 0..50 {
            model.mutate_sequence(&mut seq, &mut rng);
            assert_eq!(seq.len(), 100);
        }
    }

    #[test]
    fn test_mutate_sequence_low_rate() {
        let model = MutationModel::new(0.01).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        let mut seq = Sequence::from_str("ACGT".repeat(250).as_str()).unwrap();
        let count = model.mutate_sequence(&mut seq, &mut rng);

        // 1000 bp at 1% gives ~10 expected events
        assert!(count < 30);
    }

    #[test]
    fn test_mutate_sequence_deterministic() {
        let model = MutationModel::new(0.1).unwrap();

        let mut seq1 = Sequence::from_str("ACGTACGTACGTACGT").unwrap();
        let mut seq2 = Sequence::from_str("ACGTACGTACGTACGT").unwrap();

        let mut rng1 = Xoshiro256PlusPlus::seed_from_u64(123);
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(123);

        let count1 = model.mutate_sequence(&mut seq1, &mut rng1);
        let count2 = model.mutate_sequence(&mut seq2, &mut rng2);

        // Same seed should produce same results
        assert_eq!(count1, count2);
        assert_eq!(seq1.to_string(), seq2.to_string());
    }

    #[test]
    fn test_mutation_error_display() {
        let err = MutationError::InvalidMutationRate(1.5);
        let msg = format!("{err}");
        assert!(msg.contains("Invalid mutation rate"));
        assert!(msg.contains("1.5"));
    }
}
