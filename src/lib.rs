pub mod bracket;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod matches;
pub mod random;
pub mod rating;
pub mod services;
pub mod swiss;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::monte_carlo::MonteCarloService;
use crate::services::simulation::SimulationService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        let seed = rand::random::<u64>();
        info!("No seed given, using {}", seed);
        seed
    })
}

pub fn handle_simulate(seed: Option<u64>, json: bool) -> Result<()> {
    let service = SimulationService::new(AppConfig::new())?;
    service.run(resolve_seed(seed), json)
}

pub fn handle_monte_carlo(runs: usize, seed: Option<u64>) -> Result<()> {
    let service = MonteCarloService::new(SimulationService::new(AppConfig::new())?);
    service.run_and_print(runs, resolve_seed(seed))
}

pub fn handle_roster() -> Result<()> {
    let service = SimulationService::new(AppConfig::new())?;
    service.print_roster();
    Ok(())
}
