#[cfg(test)]
#[path = "../../tests/unit/population/updater_test.rs"]
mod updater_test;

use crate::models::Population;
use crate::operators::*;
use crate::utils::Random;
use std::sync::Arc;

/// Produces the next generation: orders chromosomes by fitness, crosses adjacent pairs and
/// mutates individual chromosomes.
pub struct PopulationUpdater {
    crossover_probability: f64,
    mutation_probability: f64,
    crossover: Box<dyn CrossoverOperator + Send + Sync>,
    mutation: Box<dyn MutationOperator + Send + Sync>,
    random: Arc<dyn Random + Send + Sync>,
}

impl PopulationUpdater {
    /// Creates a new instance of `PopulationUpdater` with single-point crossover and flip mutation.
    pub fn new(crossover_probability: f64, mutation_probability: f64, random: Arc<dyn Random + Send + Sync>) -> Self {
        Self {
            crossover_probability,
            mutation_probability,
            crossover: Box::<SinglePointCrossover>::default(),
            mutation: Box::<FlipMutation>::default(),
            random,
        }
    }

    /// Replaces default genetic operators.
    pub fn with_operators(
        mut self,
        crossover: Box<dyn CrossoverOperator + Send + Sync>,
        mutation: Box<dyn MutationOperator + Send + Sync>,
    ) -> Self {
        self.crossover = crossover;
        self.mutation = mutation;
        self
    }

    /// Updates population in place. Fitness of chromosomes must be evaluated before the call.
    pub fn update(&self, population: &mut Population) {
        let random = self.random.as_ref();
        let chromosomes = &mut population.chromosomes;

        chromosomes.sort_unstable_by(|a, b| b.compare_fitness(a));

        // NOTE with odd size the best chromosome has no pair, so it is never crossed
        let size = chromosomes.len();
        (size % 2..size.saturating_sub(1)).step_by(2).filter(|_| random.is_hit(self.crossover_probability)).for_each(
            |idx| {
                let (left, right) = chromosomes.split_at_mut(idx + 1);
                self.crossover.cross(&mut left[idx], &mut right[0], random);
            },
        );

        chromosomes
            .iter_mut()
            .filter(|_| random.is_hit(self.mutation_probability))
            .for_each(|chromosome| self.mutation.mutate(chromosome, random));
    }
}
