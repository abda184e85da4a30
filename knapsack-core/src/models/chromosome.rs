#[cfg(test)]
#[path = "../../tests/unit/models/chromosome_test.rs"]
mod chromosome_test;

use crate::models::KnapsackProblem;
use crate::utils::compare_floats;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// A single allele: whether the corresponding item is put into the knapsack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gen {
    /// The item is selected.
    Enable,
    /// The item is not selected.
    Disable,
}

impl Gen {
    /// Returns true if the item is selected.
    pub fn is_enabled(&self) -> bool {
        matches!(self, Gen::Enable)
    }

    /// Returns the opposite state.
    pub fn flip(self) -> Self {
        match self {
            Gen::Enable => Gen::Disable,
            Gen::Disable => Gen::Enable,
        }
    }
}

impl From<bool> for Gen {
    fn from(is_enabled: bool) -> Self {
        if is_enabled { Gen::Enable } else { Gen::Disable }
    }
}

/// One candidate solution: a gen per item plus the fitness from the last evaluation pass.
///
/// Fitness is only meaningful right after evaluation and before any genetic operator has been
/// applied to the chromosome.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chromosome {
    /// Gens, one per problem item.
    pub gens: Vec<Gen>,
    /// A fitness score.
    pub fitness: f64,
}

impl Chromosome {
    /// Creates a new chromosome with given gens and zero fitness.
    pub fn new(gens: Vec<Gen>) -> Self {
        Self { gens, fitness: 0. }
    }

    /// Returns indices of selected items.
    pub fn enabled(&self) -> impl Iterator<Item = usize> + '_ {
        self.gens.iter().enumerate().filter(|(_, gene)| gene.is_enabled()).map(|(idx, _)| idx)
    }

    /// Returns total weight of selected items.
    pub fn total_weight(&self, problem: &KnapsackProblem) -> u64 {
        self.enabled().map(|idx| problem.items[idx].weight as u64).sum()
    }

    /// Returns total value of selected items.
    pub fn total_value(&self, problem: &KnapsackProblem) -> u64 {
        self.enabled().map(|idx| problem.items[idx].value as u64).sum()
    }

    /// Compares two chromosomes by their fitness.
    pub fn compare_fitness(&self, other: &Self) -> Ordering {
        compare_floats(self.fitness, other.fitness)
    }
}

impl Display for Chromosome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for gene in self.gens.iter() {
            write!(f, "{}, ", if gene.is_enabled() { 1 } else { 0 })?;
        }
        write!(f, "] : {:.3}", self.fitness)
    }
}
