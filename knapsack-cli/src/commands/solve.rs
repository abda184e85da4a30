#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use knapsack_cli::extensions::solve::{SolutionSummary, solve_from_config, write_solution_summary};
use std::io::BufReader;

const CONFIG_ARG_NAME: &str = "CONFIG";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";
const RANDOM_SEED_ARG_NAME: &str = "seed";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves knapsack problem defined in configuration file")
        .arg(Arg::new(CONFIG_ARG_NAME).help("Sets the configuration file to use").required(true).index(1))
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies randomization seed to avoid stochastic behavior")
                .short('s')
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
}

pub fn run_solve(matches: &ArgMatches) {
    // required
    let Some(config_path) = matches.get_one::<String>(CONFIG_ARG_NAME) else {
        eprintln!("configuration file is not specified");
        process::exit(1);
    };
    let config_file = open_file(config_path, "config");

    // optional
    let seed = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "seed").unwrap_or_else(|err| {
        eprintln!("{err}");
        process::exit(1);
    });
    let is_logging = matches.get_flag(LOG_ARG_NAME);
    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));

    let (best, problem) = solve_from_config(BufReader::new(config_file), seed, is_logging).unwrap_or_else(|err| {
        eprintln!("cannot solve problem: {err}");
        process::exit(1);
    });

    println!("{best}");

    write_solution_summary(&SolutionSummary::new(&best, problem.as_ref()), create_write_buffer(out_result))
        .unwrap_or_else(|err| {
            eprintln!("{err}");
            process::exit(1);
        });
}
