//! Dense per-generation, per-individual fitness records.

use crate::errors::OutOfBounds;
use serde::Serialize;

/// A population_size × total_generations matrix of fitness values.
///
/// Entry (i, g) is individual `i`'s match fraction against the target after
/// generation `g`'s mutation pass. Storage is row-major: one contiguous row
/// per individual, one column per generation. Values are always in [0.0, 1.0].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitnessMatrix {
    individuals: usize,
    generations: usize,
    data: Vec<f64>,
}

impl FitnessMatrix {
    /// Create a zero-filled matrix for `individuals` rows and `generations`
    /// columns.
    pub fn new(individuals: usize, generations: usize) -> Self {
        Self {
            individuals,
            generations,
            data: vec![0.0; individuals * generations],
        }
    }

    /// Number of individuals (rows).
    #[inline]
    pub fn individuals(&self) -> usize {
        self.individuals
    }

    /// Number of generations (columns).
    #[inline]
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// Get the fitness of individual `individual` after generation
    /// `generation`, or `None` if either index is out of range.
    #[inline]
    pub fn get(&self, individual: usize, generation: usize) -> Option<f64> {
        if individual >= self.individuals || generation >= self.generations {
            return None;
        }
        Some(self.data[individual * self.generations + generation])
    }

    /// Set the fitness of individual `individual` after generation
    /// `generation`.
    pub fn set(
        &mut self,
        individual: usize,
        generation: usize,
        value: f64,
    ) -> Result<(), OutOfBounds> {
        if individual >= self.individuals {
            return Err(OutOfBounds {
                index: individual,
                len: self.individuals,
            });
        }
        if generation >= self.generations {
            return Err(OutOfBounds {
                index: generation,
                len: self.generations,
            });
        }
        self.data[individual * self.generations + generation] = value;
        Ok(())
    }

    /// Borrow one individual's full fitness trajectory.
    pub fn row(&self, individual: usize) -> Option<&[f64]> {
        if individual >= self.individuals {
            return None;
        }
        let start = individual * self.generations;
        Some(&self.data[start..start + self.generations])
    }

    /// Iterate over all rows in individual order. Always yields exactly
    /// `individuals` rows, even when `generations` is zero.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.individuals).map(move |i| {
            let start = i * self.generations;
            &self.data[start..start + self.generations]
        })
    }

    /// The best fitness in the population after generation `generation`.
    pub fn column_max(&self, generation: usize) -> Option<f64> {
        if generation >= self.generations || self.individuals == 0 {
            return None;
        }
        let max = (0..self.individuals)
            .map(|i| self.data[i * self.generations + generation])
            .fold(f64::NEG_INFINITY, f64::max);
        Some(max)
    }
}
