//! Contains functionality to solve a problem defined in a configuration file.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/solve_test.rs"]
mod solve_test;

pub mod config;

use self::config::create_config_from_reader;
use knapsack_core::prelude::*;
use serde::Serialize;
use std::io::{BufReader, BufWriter, Read, Write};
use std::sync::Arc;

/// A summary of the best found solution.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SolutionSummary {
    /// Genes of the best chromosome as zeros and ones.
    pub genes: Vec<u8>,
    /// Fitness of the best chromosome.
    pub fitness: f64,
    /// Total weight of the selected items.
    pub weight: u64,
    /// Total value of the selected items.
    pub value: u64,
}

impl SolutionSummary {
    /// Creates a new instance of `SolutionSummary`.
    pub fn new(chromosome: &Chromosome, problem: &KnapsackProblem) -> Self {
        Self {
            genes: chromosome.gens.iter().map(|gene| if gene.is_enabled() { 1 } else { 0 }).collect(),
            fitness: chromosome.fitness,
            weight: chromosome.total_weight(problem),
            value: chromosome.total_value(problem),
        }
    }
}

/// Reads a configuration, runs evolution and returns the best chromosome together with the
/// problem it was evolved for.
pub fn solve_from_config<R: Read>(
    reader: BufReader<R>,
    seed: Option<u64>,
    is_logging: bool,
) -> Result<(Chromosome, Arc<KnapsackProblem>), String> {
    let config = create_config_from_reader(reader, seed, is_logging)?;
    let problem = config.problem.clone();

    let (best, _) = EvolutionSimulator::new(config).run().map_err(|err| format!("cannot run evolution: '{err}'"))?;

    Ok((best, problem))
}

/// Writes solution summary in json format.
pub fn write_solution_summary<W: Write>(summary: &SolutionSummary, mut writer: BufWriter<W>) -> Result<(), String> {
    serde_json::to_writer(&mut writer, summary).map_err(|err| format!("cannot serialize solution: '{err}'"))?;

    writeln!(writer).and_then(|_| writer.flush()).map_err(|err| format!("cannot write solution: '{err}'"))
}
