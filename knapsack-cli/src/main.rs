//! A command line interface to knapsack genetic algorithm solver.

mod commands;

use clap::Command;
use commands::solve::{get_solve_app, run_solve};
use std::process;

fn main() {
    let matches = Command::new("Knapsack Genetic Algorithm Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to knapsack genetic algorithm solver")
        .subcommand(get_solve_app())
        .get_matches();

    match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches),
        Some((name, _)) => {
            eprintln!("unknown subcommand: '{name}'");
            process::exit(1);
        }
        None => {
            eprintln!("No subcommand was used. Use -h to print help information.");
            process::exit(1);
        }
    }
}
