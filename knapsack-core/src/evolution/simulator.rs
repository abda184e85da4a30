#[cfg(test)]
#[path = "../../tests/unit/evolution/simulator_test.rs"]
mod simulator_test;

use super::*;
use crate::fitness::{FitnessEvaluator, get_best_fit};
use crate::population::{PopulationUpdater, UpdaterHandle, create_random_population};
use crate::utils::{GenericError, Timer};

/// An entity which drives evolution: evaluates population, tracks algorithm state, checks the
/// finish condition and hands the population over to the updater until the condition is met.
pub struct EvolutionSimulator {
    config: EvolutionConfig,
}

impl EvolutionSimulator {
    /// Creates a new instance of `EvolutionSimulator`.
    pub fn new(config: EvolutionConfig) -> Self {
        Self { config }
    }

    /// Runs evolution till the finish condition is met and returns the best chromosome
    /// from the last evaluated population.
    pub fn run(self) -> EvolutionResult {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .map_err(|err| GenericError::from(format!("cannot build evolution runtime: {err}")))?;

        runtime.block_on(evolve(self.config))
    }
}

async fn evolve(config: EvolutionConfig) -> EvolutionResult {
    let environment = config.environment.clone();
    let random = environment.random.clone();

    let evaluator = FitnessEvaluator::new(config.problem.clone());
    let updater = UpdaterHandle::new(PopulationUpdater::new(
        config.crossover_probability,
        config.mutation_probability,
        random.clone(),
    ));
    let mut telemetry = Telemetry::new(config.telemetry.clone());
    let mut state = AlgorithmState::default();

    let init_time = Timer::start();
    let mut population = create_random_population(config.population_size, config.problem.size(), random.as_ref());
    telemetry.on_initial(&population, init_time);

    loop {
        let generation_time = Timer::start();

        evaluator.calculate_fitness(&mut population);

        let best_fitness = get_best_fit(&population)
            .map(|best| best.fitness)
            .ok_or_else(|| GenericError::from("cannot evaluate empty population"))?;

        state.update(best_fitness);

        if let Some(hook) = config.generation_hook.as_ref() {
            (hook)(state.number_of_updates, &population, &state);
        }

        let termination_estimate = config.finish_condition.estimate(&state, best_fitness);
        telemetry.on_generation(&population, &state, termination_estimate, generation_time);

        if config.finish_condition.is_termination(&state, best_fitness) {
            break;
        }

        population = updater.update(population).await?;
    }

    telemetry.on_result(&population);
    (environment.logger)(format!("evolution finished after {} generations", state.number_of_updates).as_str());

    let best = get_best_fit(&population).cloned().ok_or_else(|| GenericError::from("no chromosomes in population"))?;

    Ok((best, telemetry.take_metrics()))
}
