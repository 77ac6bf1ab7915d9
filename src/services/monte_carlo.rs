use std::collections::HashMap;

use anyhow::Result;
use log::info;
use serde::Serialize;

use crate::bracket::BracketRunResult;
use crate::domain::CompetitorCode;
use crate::services::simulation::SimulationService;

/// How often a competitor reached each stage over many runs
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompetitorTally {
    pub code: CompetitorCode,
    /// Swiss qualifiers are exactly the quarterfinal seeds
    pub swiss_qualifications: usize,
    pub semifinals: usize,
    pub finals: usize,
    pub titles: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonteCarloSummary {
    pub runs: usize,
    pub base_seed: u64,
    /// Runs whose opening draw had to keep a same-region pairing
    pub region_clash_runs: usize,
    /// Sorted by titles, then finals, then roster order
    pub tallies: Vec<CompetitorTally>,
}

impl MonteCarloSummary {
    pub fn rate(&self, count: usize) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            count as f64 / self.runs as f64
        }
    }

    pub fn tally(&self, code: &str) -> Option<&CompetitorTally> {
        self.tallies.iter().find(|t| t.code == code)
    }
}

/// Repeats independent runs; run `i` is seeded with `base_seed + i`
pub struct MonteCarloService {
    simulation: SimulationService,
}

impl MonteCarloService {
    pub fn new(simulation: SimulationService) -> Self {
        Self { simulation }
    }

    pub fn run(&self, runs: usize, base_seed: u64) -> Result<MonteCarloSummary> {
        info!("=== Starting Monte Carlo ({} runs, base seed {}) ===", runs, base_seed);

        let order: Vec<CompetitorCode> = self
            .simulation
            .tournament()
            .roster()
            .iter()
            .map(|c| c.code.clone())
            .collect();
        let mut tallies: HashMap<CompetitorCode, CompetitorTally> = order
            .iter()
            .map(|code| {
                let tally = CompetitorTally {
                    code: code.clone(),
                    ..Default::default()
                };
                (code.clone(), tally)
            })
            .collect();
        let mut region_clash_runs = 0;

        for i in 0..runs {
            let seed = base_seed.wrapping_add(i as u64);
            let result = self.simulation.simulate(seed)?;
            if !result.diagnostics.is_empty() {
                region_clash_runs += 1;
            }
            record_run(&mut tallies, &result);

            if should_log(i + 1, runs) {
                info!("  → Progress: {}/{}", i + 1, runs);
            }
        }

        let mut ranked: Vec<CompetitorTally> = order
            .iter()
            .filter_map(|code| tallies.remove(code))
            .collect();
        ranked.sort_by(|a, b| b.titles.cmp(&a.titles).then(b.finals.cmp(&a.finals)));

        info!("=== Monte Carlo Complete ===");
        Ok(MonteCarloSummary {
            runs,
            base_seed,
            region_clash_runs,
            tallies: ranked,
        })
    }

    pub fn run_and_print(&self, runs: usize, base_seed: u64) -> Result<()> {
        let summary = self.run(runs, base_seed)?;
        crate::services::report::print_summary(&summary, self.simulation.tournament().roster());
        Ok(())
    }
}

fn record_run(tallies: &mut HashMap<CompetitorCode, CompetitorTally>, result: &BracketRunResult) {
    let playoffs = &result.playoffs;

    for code in &playoffs.seeds {
        bump(tallies, code, |t| t.swiss_qualifications += 1);
    }
    for semi in &playoffs.semifinals {
        for code in [&semi.side_a, &semi.side_b] {
            bump(tallies, code, |t| t.semifinals += 1);
        }
    }
    for code in [&playoffs.final_match.side_a, &playoffs.final_match.side_b] {
        bump(tallies, code, |t| t.finals += 1);
    }
    bump(tallies, &playoffs.champion, |t| t.titles += 1);
}

fn bump<F: FnOnce(&mut CompetitorTally)>(
    tallies: &mut HashMap<CompetitorCode, CompetitorTally>,
    code: &str,
    update: F,
) {
    if let Some(tally) = tallies.get_mut(code) {
        update(tally);
    }
}

fn should_log(current: usize, total: usize) -> bool {
    current % 1000 == 0 || current == total
}
