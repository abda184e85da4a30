//! Solver configuration.
//!
//! An example of configuration file:
//!
//! ```json
//! {
//!   "items": [{"value": 1, "weight": 2}, {"value": 2, "weight": 1}],
//!   "weightLimit": 8,
//!   "populationSize": 5,
//!   "crossoverProbability": 0.3,
//!   "mutationProbability": 0.2,
//!   "finishCondition": {"type": "convergence-of-fitness", "streak": 5},
//!   "seed": 42,
//!   "telemetry": {"logBest": 1, "logPopulation": 10}
//! }
//! ```

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use knapsack_core::prelude::*;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// A problem and algorithm configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Items to select from.
    pub items: Vec<Item>,
    /// Maximum total weight of selected items.
    pub weight_limit: u64,
    /// Amount of chromosomes in population.
    pub population_size: usize,
    /// A probability to cross a pair of chromosomes. Default is 0.3.
    pub crossover_probability: Option<f64>,
    /// A probability to mutate a chromosome. Default is 0.2.
    pub mutation_probability: Option<f64>,
    /// Specifies when evolution stops.
    pub finish_condition: FinishCondition,
    /// A random seed. When omitted, the random generator is seeded from entropy.
    pub seed: Option<u64>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// A logging configuration.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryConfig {
    /// Specifies how often best individual is logged. Default is 100 (generations).
    pub log_best: Option<usize>,
    /// Specifies how often population is logged. Default is 1000 (generations).
    pub log_population: Option<usize>,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates an evolution config builder from config. A seed, when passed, overrides the one
/// from config. Logging is enabled when the flag is set or telemetry is configured.
pub fn create_builder_from_config(config: Config, seed: Option<u64>, is_logging: bool) -> EvolutionConfigBuilder {
    const LOG_BEST: usize = 100;
    const LOG_POPULATION: usize = 1000;

    let telemetry = if is_logging { Some(config.telemetry.unwrap_or_default()) } else { config.telemetry };

    let logger: InfoLogger =
        if telemetry.is_some() { Arc::new(|msg: &str| println!("{msg}")) } else { Arc::new(|_: &str| {}) };

    let random: Arc<dyn Random + Send + Sync> = match seed.or(config.seed) {
        Some(seed) => Arc::new(DefaultRandom::new_with_seed(seed)),
        None => Arc::new(DefaultRandom::default()),
    };

    let mut builder = EvolutionConfigBuilder::default()
        .with_items(config.items)
        .with_weight_limit(config.weight_limit)
        .with_population_size(config.population_size)
        .with_finish_condition(config.finish_condition)
        .with_environment(Arc::new(Environment::new(random, logger.clone())));

    if let Some(probability) = config.crossover_probability {
        builder = builder.with_crossover_probability(probability);
    }

    if let Some(probability) = config.mutation_probability {
        builder = builder.with_mutation_probability(probability);
    }

    if let Some(telemetry) = telemetry {
        builder = builder.with_telemetry(TelemetryMode::OnlyLogging {
            logger,
            log_best: telemetry.log_best.unwrap_or(LOG_BEST),
            log_population: telemetry.log_population.unwrap_or(LOG_POPULATION),
        });
    }

    builder
}

/// Creates a validated evolution config from reader.
pub fn create_config_from_reader<R: Read>(
    reader: BufReader<R>,
    seed: Option<u64>,
    is_logging: bool,
) -> Result<EvolutionConfig, String> {
    read_config(reader).and_then(|config| {
        create_builder_from_config(config, seed, is_logging)
            .build()
            .map_err(|err| format!("invalid configuration: '{err}'"))
    })
}
