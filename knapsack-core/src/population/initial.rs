#[cfg(test)]
#[path = "../../tests/unit/population/initial_test.rs"]
mod initial_test;

use crate::models::{Chromosome, Gen, Population};
use crate::utils::Random;

/// Creates a population of given size where each gen is enabled with probability 0.5.
pub fn create_random_population(population_size: usize, chromosome_size: usize, random: &dyn Random) -> Population {
    Population::new((0..population_size).map(|_| create_random_chromosome(chromosome_size, random)).collect())
}

fn create_random_chromosome(chromosome_size: usize, random: &dyn Random) -> Chromosome {
    Chromosome::new((0..chromosome_size).map(|_| Gen::from(random.uniform_int(1, 10) > 5)).collect())
}
