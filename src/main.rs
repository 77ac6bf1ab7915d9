use anyhow::Result;

use worlds_simulator::cli::Command;
use worlds_simulator::{handle_monte_carlo, handle_roster, handle_simulate, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Simulate { seed, json } => handle_simulate(*seed, *json),
        Command::MonteCarlo { runs, seed } => handle_monte_carlo(*runs, *seed),
        Command::Roster => handle_roster(),
    }
}
