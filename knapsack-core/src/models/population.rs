#[cfg(test)]
#[path = "../../tests/unit/models/population_test.rs"]
mod population_test;

use crate::models::Chromosome;
use std::fmt::{Display, Formatter};

/// A fixed size set of chromosomes evolved together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Population {
    /// Chromosomes of the current generation.
    pub chromosomes: Vec<Chromosome>,
}

impl Population {
    /// Creates a new instance of `Population`.
    pub fn new(chromosomes: Vec<Chromosome>) -> Self {
        Self { chromosomes }
    }

    /// Returns amount of chromosomes.
    pub fn size(&self) -> usize {
        self.chromosomes.len()
    }

    /// Returns true if population has no chromosomes.
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// Returns fitness values in population order.
    pub fn fitness(&self) -> impl Iterator<Item = f64> + '_ {
        self.chromosomes.iter().map(|chromosome| chromosome.fitness)
    }
}

impl Display for Population {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.chromosomes.iter().try_for_each(|chromosome| writeln!(f, "{chromosome}"))
    }
}
