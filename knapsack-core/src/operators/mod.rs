//! Specifies genetic operators which are used to produce the next generation.

use crate::models::Chromosome;
use crate::utils::Random;

mod crossover;
pub use self::crossover::SinglePointCrossover;

mod mutation;
pub use self::mutation::{DEFAULT_GEN_FLIP_RATE, FlipMutation};

/// A stochastic operator which modifies a single chromosome in place.
pub trait MutationOperator {
    /// Mutates given chromosome.
    fn mutate(&self, chromosome: &mut Chromosome, random: &dyn Random);
}

/// A stochastic operator which exchanges genetic material between two chromosomes in place.
/// Both parents are overwritten by children, so no alleles are created or destroyed.
pub trait CrossoverOperator {
    /// Crosses two given chromosomes.
    fn cross(&self, first: &mut Chromosome, second: &mut Chromosome, random: &dyn Random);
}
