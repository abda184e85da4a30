#[cfg(test)]
#[path = "../../tests/unit/operators/crossover_test.rs"]
mod crossover_test;

use super::*;

/// A single-point crossover: picks a cut point in `[1, length - 1]` and swaps the tails.
#[derive(Default)]
pub struct SinglePointCrossover {}

impl CrossoverOperator for SinglePointCrossover {
    fn cross(&self, first: &mut Chromosome, second: &mut Chromosome, random: &dyn Random) {
        let length = first.gens.len().min(second.gens.len());

        // NOTE zero or one gen leaves no valid cut point: no exchange is performed
        if length < 2 {
            return;
        }

        let cut_point = random.uniform_int(1, length as i32 - 1) as usize;

        first.gens[cut_point..length].swap_with_slice(&mut second.gens[cut_point..length]);
    }
}
