use anyhow::{Context, Result};
use log::info;

use crate::bracket::{BracketRunResult, run_simulation};
use crate::config::settings::AppConfig;
use crate::config::{get_competitors, get_play_in_routing};
use crate::domain::TournamentConfig;
use crate::errors::{config_context, run_context};
use crate::random;
use crate::services::report;

pub struct SimulationService {
    config: AppConfig,
    tournament: TournamentConfig,
}

impl SimulationService {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate().context(config_context("settings"))?;
        let tournament = TournamentConfig::new(get_competitors(), get_play_in_routing(), &config.swiss)
            .context(config_context("tournament configuration"))?;

        Ok(Self { config, tournament })
    }

    pub fn tournament(&self) -> &TournamentConfig {
        &self.tournament
    }

    pub fn simulate(&self, seed: u64) -> Result<BracketRunResult> {
        let mut rng = random::seeded(seed);
        run_simulation(&self.tournament, &self.config, &mut rng).context(run_context(seed))
    }

    pub fn run(&self, seed: u64, json: bool) -> Result<()> {
        info!("=== Starting Simulation (seed {}) ===", seed);
        let result = self.simulate(seed)?;

        if json {
            let rendered = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
            println!("{}", rendered);
        } else {
            report::print_run(&result, self.tournament.roster());
        }

        info!("=== Simulation Complete ===");
        Ok(())
    }

    pub fn print_roster(&self) {
        report::print_roster(self.tournament.roster(), self.tournament.play_in());
    }
}
