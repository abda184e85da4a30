//! Contains functionality to run evolution simulation.

use crate::models::{Chromosome, Population};
use crate::utils::GenericResult;
use std::sync::Arc;

mod config;
pub use self::config::*;

mod simulator;
pub use self::simulator::*;

mod state;
pub use self::state::AlgorithmState;

pub mod telemetry;
pub use self::telemetry::*;

/// Defines evolution result type: the best chromosome found and optional metrics.
pub type EvolutionResult = GenericResult<(Chromosome, Option<TelemetryMetrics>)>;

/// A read-only observer called once per generation, after state tracking and before the
/// termination check. Receives generation number (starting from one), population and state.
pub type GenerationHook = Arc<dyn Fn(usize, &Population, &AlgorithmState) + Send + Sync>;
