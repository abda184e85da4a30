//! Contains fitness evaluation of knapsack chromosomes.

#[cfg(test)]
#[path = "../../tests/unit/fitness/evaluator_test.rs"]
mod evaluator_test;

use crate::models::{Chromosome, KnapsackProblem, Population};
use std::sync::Arc;

/// Assigns fitness to chromosomes: a sum of value/weight ratios of selected items, or exactly
/// zero when selected items exceed the weight limit.
pub struct FitnessEvaluator {
    problem: Arc<KnapsackProblem>,
}

impl FitnessEvaluator {
    /// Creates a new instance of `FitnessEvaluator`.
    pub fn new(problem: Arc<KnapsackProblem>) -> Self {
        Self { problem }
    }

    /// Recalculates fitness of every chromosome in the population.
    pub fn calculate_fitness(&self, population: &mut Population) {
        population.chromosomes.iter_mut().for_each(|chromosome| {
            chromosome.fitness = self.evaluate(chromosome);
        });
    }

    /// Calculates fitness of a single chromosome without modifying it.
    pub fn evaluate(&self, chromosome: &Chromosome) -> f64 {
        let (fitness, weight) = chromosome
            .gens
            .iter()
            .zip(self.problem.items.iter())
            .filter(|(gene, _)| gene.is_enabled())
            .fold((0., 0_u64), |(fitness, weight), (_, item)| (fitness + item.ratio(), weight + item.weight as u64));

        // NOTE infeasible selection is not an error, zero fitness is the signal
        if weight > self.problem.weight_limit { 0. } else { fitness }
    }
}

/// Returns the chromosome with maximum fitness, the first one in population order wins a tie.
pub fn get_best_fit(population: &Population) -> Option<&Chromosome> {
    population.chromosomes.iter().fold(None, |best: Option<&Chromosome>, chromosome| match best {
        Some(best) if chromosome.fitness <= best.fitness => Some(best),
        _ => Some(chromosome),
    })
}
