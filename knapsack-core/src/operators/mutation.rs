#[cfg(test)]
#[path = "../../tests/unit/operators/mutation_test.rs"]
mod mutation_test;

use super::*;

/// A probability to flip a single gen when mutation is applied to a chromosome.
pub const DEFAULT_GEN_FLIP_RATE: f64 = 0.15;

/// A mutation which flips each gen independently with a fixed probability.
pub struct FlipMutation {
    flip_rate: f64,
}

impl FlipMutation {
    /// Creates a new instance of `FlipMutation`.
    pub fn new(flip_rate: f64) -> Self {
        Self { flip_rate }
    }
}

impl Default for FlipMutation {
    fn default() -> Self {
        Self::new(DEFAULT_GEN_FLIP_RATE)
    }
}

impl MutationOperator for FlipMutation {
    fn mutate(&self, chromosome: &mut Chromosome, random: &dyn Random) {
        chromosome.gens.iter_mut().filter(|_| random.is_hit(self.flip_rate)).for_each(|gene| *gene = gene.flip());
    }
}
