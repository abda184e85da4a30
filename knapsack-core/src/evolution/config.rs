#[cfg(test)]
#[path = "../../tests/unit/evolution/config_test.rs"]
mod config_test;

use super::*;
use crate::models::{Item, KnapsackProblem};
use crate::termination::FinishCondition;
use crate::utils::{Environment, GenericError};

/// A default probability to cross a pair of chromosomes.
pub const DEFAULT_CROSSOVER_PROBABILITY: f64 = 0.3;
/// A default probability to mutate a chromosome.
pub const DEFAULT_MUTATION_PROBABILITY: f64 = 0.2;

/// A validated configuration which controls evolution execution.
pub struct EvolutionConfig {
    /// A problem to solve.
    pub problem: Arc<KnapsackProblem>,
    /// Amount of chromosomes in every generation.
    pub population_size: usize,
    /// A probability to cross a pair of adjacent chromosomes.
    pub crossover_probability: f64,
    /// A probability to mutate a chromosome.
    pub mutation_probability: f64,
    /// Defines when evolution should stop.
    pub finish_condition: FinishCondition,
    /// An environment shared by the driver and the updater.
    pub environment: Arc<Environment>,
    /// A telemetry mode.
    pub telemetry: TelemetryMode,
    /// An optional per generation observer.
    pub generation_hook: Option<GenerationHook>,
}

/// Provides configurable way to build evolution configuration using fluent interface style.
pub struct EvolutionConfigBuilder {
    items: Vec<Item>,
    weight_limit: Option<u64>,
    population_size: Option<usize>,
    crossover_probability: f64,
    mutation_probability: f64,
    finish_condition: Option<FinishCondition>,
    environment: Option<Arc<Environment>>,
    telemetry: Option<TelemetryMode>,
    generation_hook: Option<GenerationHook>,
}

impl Default for EvolutionConfigBuilder {
    fn default() -> Self {
        Self {
            items: vec![],
            weight_limit: None,
            population_size: None,
            crossover_probability: DEFAULT_CROSSOVER_PROBABILITY,
            mutation_probability: DEFAULT_MUTATION_PROBABILITY,
            finish_condition: None,
            environment: None,
            telemetry: None,
            generation_hook: None,
        }
    }
}

impl EvolutionConfigBuilder {
    /// Sets items to select from.
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    /// Sets maximum total weight of selected items.
    pub fn with_weight_limit(mut self, weight_limit: u64) -> Self {
        self.weight_limit = Some(weight_limit);
        self
    }

    /// Sets population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = Some(population_size);
        self
    }

    /// Sets crossover probability. Default is 0.3.
    pub fn with_crossover_probability(mut self, probability: f64) -> Self {
        self.crossover_probability = probability;
        self
    }

    /// Sets mutation probability. Default is 0.2.
    pub fn with_mutation_probability(mut self, probability: f64) -> Self {
        self.mutation_probability = probability;
        self
    }

    /// Sets finish condition.
    pub fn with_finish_condition(mut self, finish_condition: FinishCondition) -> Self {
        self.finish_condition = Some(finish_condition);
        self
    }

    /// Sets environment. Default is environment with entropy seeded random and stdout logger.
    pub fn with_environment(mut self, environment: Arc<Environment>) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Sets telemetry mode. Default is no telemetry.
    pub fn with_telemetry(mut self, telemetry: TelemetryMode) -> Self {
        self.telemetry = Some(telemetry);
        self
    }

    /// Sets a hook which observes each generation.
    pub fn with_generation_hook(mut self, hook: GenerationHook) -> Self {
        self.generation_hook = Some(hook);
        self
    }

    /// Builds the evolution config. All configuration errors are reported at once.
    pub fn build(self) -> Result<EvolutionConfig, GenericError> {
        let mut errors: Vec<GenericError> = vec![];

        if self.items.is_empty() {
            errors.push("item list cannot be empty".into());
        }

        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.weight == 0)
            .for_each(|(idx, _)| errors.push(format!("item weight must be positive, item index: {idx}").into()));

        let weight_limit = self.weight_limit.filter(|&weight_limit| weight_limit > 0);
        if weight_limit.is_none() {
            errors.push("weight limit must be positive".into());
        }

        let population_size = self.population_size.filter(|&population_size| population_size > 0);
        if population_size.is_none() {
            errors.push("population size must be positive".into());
        }

        [("crossover", self.crossover_probability), ("mutation", self.mutation_probability)]
            .into_iter()
            .filter(|(_, probability)| !(0. ..=1.).contains(probability))
            .for_each(|(name, probability)| {
                errors.push(format!("{name} probability must be in [0, 1] range, got: {probability}").into())
            });

        let finish_condition = match self.finish_condition {
            Some(finish_condition) => match finish_condition.validate() {
                Ok(_) => Some(finish_condition),
                Err(err) => {
                    errors.push(err);
                    None
                }
            },
            None => {
                errors.push("finish condition must be specified".into());
                None
            }
        };

        let (weight_limit, population_size, finish_condition) = match (weight_limit, population_size, finish_condition) {
            (Some(weight_limit), Some(population_size), Some(finish_condition)) if errors.is_empty() => {
                (weight_limit, population_size, finish_condition)
            }
            _ => return Err(errors.into()),
        };

        let environment = self.environment.unwrap_or_default();
        let logger = environment.logger.clone();

        (logger)(format!("configured to use finish condition: {finish_condition}").as_str());
        (logger)(
            format!(
                "configured to use population size: {population_size}, crossover probability: {}, mutation probability: {}",
                self.crossover_probability, self.mutation_probability
            )
            .as_str(),
        );

        Ok(EvolutionConfig {
            problem: Arc::new(KnapsackProblem::new(self.items, weight_limit)),
            population_size,
            crossover_probability: self.crossover_probability,
            mutation_probability: self.mutation_probability,
            finish_condition,
            environment,
            telemetry: self.telemetry.unwrap_or(TelemetryMode::None),
            generation_hook: self.generation_hook,
        })
    }
}
