//! Population management.
//!
//! A population is a flat collection of sequences. Individuals never
//! interact: no selection, no reproduction, no crossover. Each one simply
//! mutates in place once per generation.

use crate::base::Sequence;
use std::sync::Arc;

/// A population of independently mutating sequences.
#[derive(Debug, Clone)]
pub struct Population {
    /// The individuals in this population
    individuals: Vec<Sequence>,
    /// Generation counter
    generation: usize,
    /// Population ID
    id: Arc<str>,
}

impl Population {
    /// Create a population of `size` copies of `initial`.
    pub fn from_initial(id: impl Into<Arc<str>>, initial: &Sequence, size: usize) -> Self {
        Self {
            individuals: vec![initial.clone(); size],
            generation: 0,
            id: id.into(),
        }
    }

    /// Get population ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the current generation number.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Increment the generation counter.
    pub fn increment_generation(&mut self) {
        self.generation += 1;
    }

    /// Get the number of individuals in the population.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// Check if population is empty.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get all individuals as a slice.
    pub fn individuals(&self) -> &[Sequence] {
        &self.individuals
    }

    /// Get mutable access to individuals.
    pub fn individuals_mut(&mut self) -> &mut [Sequence] {
        &mut self.individuals
    }

    /// Get a specific individual by index.
    pub fn get(&self, index: usize) -> Option<&Sequence> {
        self.individuals.get(index)
    }
}
