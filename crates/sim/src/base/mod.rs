//! Base types for sequence representation.
//!
//! This module provides the foundational types for representing nucleotides,
//! sequences, and fitness values in the virevo library.

pub mod fitness;
mod nucleotide;
mod sequence;

pub use fitness::FitnessValue;
pub use nucleotide::Nucleotide;
pub use sequence::{Sequence, SharedSequence};
