//! # virevo-sim
//!
//! Core library for a stochastic genome evolution simulation. A population of
//! fixed-length DNA sequences mutates independently over discrete generations,
//! and each individual is scored against a target sequence after every
//! mutation pass. The per-generation, per-individual scores are collected in a
//! [`FitnessMatrix`](simulation::FitnessMatrix).
//!
//! There is no selection, recombination, or reproduction here: mutation is the
//! only dynamic, so each individual performs an independent random walk toward
//! (or away from) the target.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod prelude;
pub mod simulation;

pub use base::{Nucleotide, Sequence, SharedSequence};
