//! This crate contains a generational genetic algorithm which solves a 0/1 knapsack selection
//! problem: a population of binary encoded chromosomes is evolved toward the maximal sum of
//! value per weight ratios of selected items, while the total weight stays within a limit.
//!
//! The evolution driver and the population updater run as two cooperating units of work: the
//! driver evaluates the population and checks the finish condition, then hands the population
//! over to the updater and waits for it to come back.
//!
//! # Examples
//!
//! ```
//! use knapsack_core::prelude::*;
//! use std::sync::Arc;
//!
//! let config = EvolutionConfigBuilder::default()
//!     .with_items(vec![Item::new(1, 2), Item::new(2, 1), Item::new(1, 4), Item::new(3, 5)])
//!     .with_weight_limit(8)
//!     .with_population_size(5)
//!     .with_finish_condition(FinishCondition::NumberOfUpdates { count: 10 })
//!     .with_environment(Arc::new(Environment::new_with_seed(42)))
//!     .build()
//!     .expect("cannot build config");
//!
//! let (best, _) = EvolutionSimulator::new(config).run().expect("cannot run evolution");
//!
//! assert_eq!(best.gens.len(), 4);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod evolution;
pub mod fitness;
pub mod models;
pub mod operators;
pub mod population;
pub mod prelude;
pub mod termination;
pub mod utils;
