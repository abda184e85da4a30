//! The termination module contains logic which defines when evolution should stop.

#[cfg(test)]
#[path = "../../tests/unit/termination/finish_condition_test.rs"]
mod finish_condition_test;

use crate::evolution::AlgorithmState;
use crate::utils::{GenericError, GenericResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Specifies a finish condition of evolution. Exactly one strategy is used per run and each
/// strategy carries only its own parameter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FinishCondition {
    /// Stops when the amount of generations reaches the given count.
    NumberOfUpdates {
        /// Amount of evaluated generations.
        count: usize,
    },
    /// Stops when the best fitness in population reaches the given threshold.
    RequiredFitness {
        /// Fitness threshold.
        threshold: f64,
    },
    /// Stops when the best fitness stays the same for the given amount of consecutive generations.
    ConvergenceOfFitness {
        /// Length of convergence streak.
        streak: usize,
    },
}

impl FinishCondition {
    /// Returns true if finish condition is met for given state and current best fitness.
    pub fn is_termination(&self, state: &AlgorithmState, best_fitness: f64) -> bool {
        match self {
            FinishCondition::NumberOfUpdates { count } => state.number_of_updates >= *count,
            FinishCondition::RequiredFitness { threshold } => best_fitness >= *threshold,
            FinishCondition::ConvergenceOfFitness { streak } => state.convergence_counter >= *streak,
        }
    }

    /// Returns a relative estimation till termination. Value is in the `[0, 1]` range.
    pub fn estimate(&self, state: &AlgorithmState, best_fitness: f64) -> f64 {
        let ratio = match self {
            FinishCondition::NumberOfUpdates { count } => state.number_of_updates as f64 / *count as f64,
            FinishCondition::RequiredFitness { threshold } if *threshold > 0. => best_fitness / threshold,
            FinishCondition::RequiredFitness { .. } => 1.,
            FinishCondition::ConvergenceOfFitness { streak } => state.convergence_counter as f64 / *streak as f64,
        };

        if ratio.is_finite() { ratio.clamp(0., 1.) } else { 0. }
    }

    /// Checks that the condition parameter is meaningful.
    pub fn validate(&self) -> GenericResult<()> {
        match self {
            FinishCondition::NumberOfUpdates { count } if *count == 0 => {
                Err("number of updates must be at least 1".into())
            }
            FinishCondition::RequiredFitness { threshold } if !threshold.is_finite() => {
                Err(format!("required fitness must be a finite number, got: {threshold}").into())
            }
            FinishCondition::ConvergenceOfFitness { streak } if *streak == 0 => {
                Err("convergence streak must be at least 1".into())
            }
            _ => Ok(()),
        }
    }
}

impl FromStr for FinishCondition {
    type Err = GenericError;

    /// Parses finish condition from `<type>:<value>` form, e.g. `convergence-of-fitness:5`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (kind, parameter) =
            value.split_once(':').ok_or_else(|| format!("finish condition must be in '<type>:<value>' form: '{value}'"))?;

        let parse_count = |parameter: &str| {
            parameter.trim().parse::<usize>().map_err(|err| format!("cannot parse '{parameter}' as count: {err}"))
        };

        let condition = match kind.trim() {
            "number-of-updates" => FinishCondition::NumberOfUpdates { count: parse_count(parameter)? },
            "required-fitness" => FinishCondition::RequiredFitness {
                threshold: parameter
                    .trim()
                    .parse::<f64>()
                    .map_err(|err| format!("cannot parse '{parameter}' as fitness: {err}"))?,
            },
            "convergence-of-fitness" => FinishCondition::ConvergenceOfFitness { streak: parse_count(parameter)? },
            _ => return Err(format!("unknown finish condition type: '{kind}'").into()),
        };

        condition.validate().map(|_| condition)
    }
}

impl Display for FinishCondition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FinishCondition::NumberOfUpdates { count } => write!(f, "number-of-updates:{count}"),
            FinishCondition::RequiredFitness { threshold } => write!(f, "required-fitness:{threshold}"),
            FinishCondition::ConvergenceOfFitness { streak } => write!(f, "convergence-of-fitness:{streak}"),
        }
    }
}
