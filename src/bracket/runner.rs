use log::info;
use serde::Serialize;

use super::playoff::{BRACKET_SIZE, PlayoffResult, run_playoffs};
use crate::config::AppConfig;
use crate::domain::{CompetitorCode, Placement, PlayInSide, TournamentConfig};
use crate::errors::{Result, SimulationError};
use crate::matches::{MatchResult, MatchSimulator, SeriesFormat};
use crate::random::RandomSource;
use crate::rating::{OutcomeModel, StrengthSnapshot, derive_strengths};
use crate::swiss::{SwissEngine, SwissStageResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayInOutcome {
    pub result: MatchResult,
    pub winning_side: PlayInSide,
    pub winner: CompetitorCode,
    pub loser: CompetitorCode,
    pub placements: Vec<Placement>,
}

/// Soft anomalies a consumer may want to flag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Diagnostic {
    RegionClashUnavoidable { attempts: usize, clashes: usize },
}

/// Complete result tree of one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BracketRunResult {
    pub strengths: StrengthSnapshot,
    pub play_in: PlayInOutcome,
    pub swiss: SwissStageResult,
    #[serde(flatten)]
    pub playoffs: PlayoffResult,
    pub diagnostics: Vec<Diagnostic>,
}

impl BracketRunResult {
    pub fn champion(&self) -> &str {
        &self.playoffs.champion
    }
}

/// Play-in, Swiss stage and playoffs in one pass over a single random stream.
///
/// Settings, and the field against them, are checked before the first draw; a failure at any later stage
/// discards the whole run.
pub fn run_simulation<R: RandomSource + ?Sized>(
    config: &TournamentConfig,
    settings: &AppConfig,
    rng: &mut R,
) -> Result<BracketRunResult> {
    settings.validate()?;
    config.check_field(&settings.swiss)?;

    let strengths = derive_strengths(config.roster(), rng);
    let simulator = MatchSimulator::new(OutcomeModel::new(&settings.outcome));

    let play_in = run_play_in(config, &strengths, &simulator, rng)?;
    let field = config.swiss_field(play_in.winning_side);

    let engine = SwissEngine::new(config.roster(), &strengths, &simulator, &settings.swiss);
    let swiss = engine.run(&field, rng)?;

    let seeds: Vec<CompetitorCode> = swiss
        .qualified
        .iter()
        .take(BRACKET_SIZE)
        .map(|s| s.code.clone())
        .collect();
    let playoffs = run_playoffs(&seeds, &strengths, &simulator, rng)?;

    let diagnostics = collect_diagnostics(&swiss);
    info!("Champion: {}", playoffs.champion);

    Ok(BracketRunResult {
        strengths,
        play_in,
        swiss,
        playoffs,
        diagnostics,
    })
}

fn run_play_in<R: RandomSource + ?Sized>(
    config: &TournamentConfig,
    strengths: &StrengthSnapshot,
    simulator: &MatchSimulator,
    rng: &mut R,
) -> Result<PlayInOutcome> {
    let routing = config.play_in();
    let strength = |code: &str| {
        strengths
            .strength_of(code)
            .ok_or_else(|| SimulationError::UnknownCompetitor {
                code: code.to_string(),
                context: "play-in".to_string(),
            })
    };

    let result = simulator.simulate_series(
        &routing.side_a,
        &routing.side_b,
        strength(&routing.side_a)?,
        strength(&routing.side_b)?,
        SeriesFormat::BestOf5,
        rng,
    );

    let winning_side = if result.side_a_won() {
        PlayInSide::A
    } else {
        PlayInSide::B
    };
    let placements = routing.placements_for(winning_side).to_vec();
    info!(
        "Play-in: {} beat {} {}",
        result.winner,
        result.loser(),
        result.score
    );

    Ok(PlayInOutcome {
        winner: result.winner.clone(),
        loser: result.loser().to_string(),
        winning_side,
        placements,
        result,
    })
}

fn collect_diagnostics(swiss: &SwissStageResult) -> Vec<Diagnostic> {
    let draw = &swiss.round_one_draw;
    if draw.constraint_satisfied {
        return Vec::new();
    }

    vec![Diagnostic::RegionClashUnavoidable {
        attempts: draw.attempts,
        clashes: draw.region_clashes,
    }]
}
