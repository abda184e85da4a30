//! This module reimports a common used types.

pub use crate::evolution::AlgorithmState;
pub use crate::evolution::EvolutionConfig;
pub use crate::evolution::EvolutionConfigBuilder;
pub use crate::evolution::EvolutionResult;
pub use crate::evolution::EvolutionSimulator;
pub use crate::evolution::GenerationHook;
pub use crate::evolution::{TelemetryMetrics, TelemetryMode};

pub use crate::fitness::{FitnessEvaluator, get_best_fit};

pub use crate::models::{Chromosome, Gen, Item, KnapsackProblem, Population};

pub use crate::termination::FinishCondition;

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::InfoLogger;
pub use crate::utils::Random;
pub use crate::utils::{GenericError, GenericResult};
