//! A command line interface to knapsack genetic algorithm solver.
//!
//! A problem together with the algorithm parameters is defined in a json file, see
//! [`extensions::solve::config::Config`] for the format.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod extensions;
