//! A module which provides the logic to collect metrics about algorithm execution and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/evolution/telemetry_test.rs"]
mod telemetry_test;

use crate::evolution::AlgorithmState;
use crate::fitness::get_best_fit;
use crate::models::Population;
use crate::utils::{InfoLogger, Timer};

/// Encapsulates different measurements regarding algorithm evaluation.
pub struct TelemetryMetrics {
    /// Algorithm duration in seconds.
    pub duration: usize,
    /// Total amount of generations.
    pub generations: usize,
    /// Speed: generations per second.
    pub speed: f64,
    /// Evolution progress.
    pub evolution: Vec<TelemetryGeneration>,
}

/// Represents information about generation.
pub struct TelemetryGeneration {
    /// Generation sequence number, starts from one.
    pub number: usize,
    /// Time since evolution started.
    pub timestamp: f64,
    /// The best fitness in population.
    pub best_fitness: f64,
    /// A convergence counter after the generation was tracked.
    pub convergence_counter: usize,
    /// Fitness of each chromosome in population order.
    pub population: Vec<f64>,
}

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best individual is logged.
        log_best: usize,
        /// Specifies how often population is logged.
        log_population: usize,
    },
    /// Only metrics collection.
    OnlyMetrics {
        /// Specifies how often population is tracked.
        track_population: usize,
    },
    /// Both logging and metrics collection.
    All {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best individual is logged.
        log_best: usize,
        /// Specifies how often population is logged.
        log_population: usize,
        /// Specifies how often population is tracked.
        track_population: usize,
    },
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    metrics: TelemetryMetrics,
    time: Timer,
    mode: TelemetryMode,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self {
            time: Timer::start(),
            metrics: TelemetryMetrics { duration: 0, generations: 0, speed: 0., evolution: vec![] },
            mode,
        }
    }

    /// Reports initial population.
    pub fn on_initial(&self, population: &Population, init_time: Timer) {
        self.log(
            format!(
                "[{}s] created initial population of {} chromosomes in {}ms",
                self.time.elapsed_secs(),
                population.size(),
                init_time.elapsed_millis()
            )
            .as_str(),
        );
    }

    /// Reports generation statistics. Should be called after fitness evaluation and state tracking.
    pub fn on_generation(
        &mut self,
        population: &Population,
        state: &AlgorithmState,
        termination_estimate: f64,
        generation_time: Timer,
    ) {
        let generation = state.number_of_updates;
        self.metrics.generations = generation;

        let (log_best, log_population, track_population) = match &self.mode {
            TelemetryMode::None => return,
            TelemetryMode::OnlyLogging { log_best, log_population, .. } => (Some(*log_best), Some(*log_population), None),
            TelemetryMode::OnlyMetrics { track_population } => (None, None, Some(*track_population)),
            TelemetryMode::All { log_best, log_population, track_population, .. } => {
                (Some(*log_best), Some(*log_population), Some(*track_population))
            }
        };

        let should = |interval: Option<usize>| interval.is_some_and(|interval| interval > 0 && generation % interval == 0);

        match get_best_fit(population) {
            Some(best) => {
                if should(log_best) {
                    self.log(
                        format!(
                            "[{}s] generation {} took {}ms, convergence: {}, progress: {:.0}%, best: {}",
                            self.time.elapsed_secs(),
                            generation,
                            generation_time.elapsed_millis(),
                            state.convergence_counter,
                            termination_estimate * 100.,
                            best
                        )
                        .as_str(),
                    );
                }

                if should(log_population) {
                    self.log_population(population);
                }

                if should(track_population) {
                    self.metrics.evolution.push(TelemetryGeneration {
                        number: generation,
                        timestamp: self.time.elapsed_secs_as_float(),
                        best_fitness: best.fitness,
                        convergence_counter: state.convergence_counter,
                        population: population.fitness().collect(),
                    });
                }
            }
            None => self.log("no chromosomes in population"),
        }
    }

    /// Reports final statistic.
    pub fn on_result(&mut self, population: &Population) {
        let generations = self.metrics.generations;
        let elapsed = self.time.elapsed_secs() as usize;
        let speed = generations as f64 / self.time.elapsed_secs_as_float().max(f64::EPSILON);

        self.metrics.duration = elapsed;
        self.metrics.speed = speed;

        if matches!(self.mode, TelemetryMode::OnlyLogging { .. } | TelemetryMode::All { .. }) {
            self.log_population(population);
        }

        self.log(format!("[{elapsed}s] total generations: {generations}, speed: {speed:.2} gen/sec").as_str());
        match get_best_fit(population) {
            Some(best) => self.log(format!("\tbest: {best}").as_str()),
            None => self.log("no chromosomes in population"),
        }
    }

    /// Gets metrics.
    pub fn take_metrics(self) -> Option<TelemetryMetrics> {
        match &self.mode {
            TelemetryMode::OnlyMetrics { .. } | TelemetryMode::All { .. } => Some(self.metrics),
            _ => None,
        }
    }

    /// Writes log message.
    pub fn log(&self, message: &str) {
        match &self.mode {
            TelemetryMode::OnlyLogging { logger, .. } => (logger)(message),
            TelemetryMode::All { logger, .. } => (logger)(message),
            _ => {}
        }
    }

    fn log_population(&self, population: &Population) {
        self.log(format!("[{}s] population state:", self.time.elapsed_secs()).as_str());
        population.chromosomes.iter().for_each(|chromosome| self.log(format!("\t{chromosome}").as_str()));
    }
}
