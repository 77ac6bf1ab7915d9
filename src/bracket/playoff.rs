use log::info;
use serde::Serialize;

use crate::domain::CompetitorCode;
use crate::errors::{Result, SimulationError};
use crate::matches::{MatchResult, MatchSimulator, SeriesFormat};
use crate::random::RandomSource;
use crate::rating::StrengthSnapshot;

pub const BRACKET_SIZE: usize = 8;

/// Quarterfinal slots as zero-based seed indices: 1v8, 2v7, 3v6, 4v5
pub const QUARTERFINAL_SLOTS: [(usize, usize); 4] = [(0, 7), (1, 6), (2, 5), (3, 4)];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayoffResult {
    pub seeds: Vec<CompetitorCode>,
    pub quarterfinals: Vec<MatchResult>,
    pub semifinals: Vec<MatchResult>,
    pub final_match: MatchResult,
    pub champion: CompetitorCode,
}

/// Fixed single-elimination bracket, no reseeding between rounds
pub fn run_playoffs<R: RandomSource + ?Sized>(
    seeds: &[CompetitorCode],
    strengths: &StrengthSnapshot,
    simulator: &MatchSimulator,
    rng: &mut R,
) -> Result<PlayoffResult> {
    if seeds.len() != BRACKET_SIZE {
        return Err(SimulationError::QualifierCount {
            expected: BRACKET_SIZE,
            actual: seeds.len(),
        });
    }

    let quarterfinals = QUARTERFINAL_SLOTS
        .iter()
        .map(|&(high, low)| play(&seeds[high], &seeds[low], strengths, simulator, rng))
        .collect::<Result<Vec<_>>>()?;

    // Q1 winner meets Q2 winner, Q3 winner meets Q4 winner
    let semifinals = quarterfinals
        .chunks_exact(2)
        .map(|pair| play(&pair[0].winner, &pair[1].winner, strengths, simulator, rng))
        .collect::<Result<Vec<_>>>()?;

    let final_match = play(
        &semifinals[0].winner,
        &semifinals[1].winner,
        strengths,
        simulator,
        rng,
    )?;
    let champion = final_match.winner.clone();
    info!("Final: {} {} {} -> champion {}", final_match.side_a, final_match.score, final_match.side_b, champion);

    Ok(PlayoffResult {
        seeds: seeds.to_vec(),
        quarterfinals,
        semifinals,
        final_match,
        champion,
    })
}

fn play<R: RandomSource + ?Sized>(
    side_a: &str,
    side_b: &str,
    strengths: &StrengthSnapshot,
    simulator: &MatchSimulator,
    rng: &mut R,
) -> Result<MatchResult> {
    let strength_a = lookup(strengths, side_a)?;
    let strength_b = lookup(strengths, side_b)?;
    Ok(simulator.simulate_series(side_a, side_b, strength_a, strength_b, SeriesFormat::BestOf5, rng))
}

fn lookup(strengths: &StrengthSnapshot, code: &str) -> Result<f64> {
    strengths
        .strength_of(code)
        .ok_or_else(|| SimulationError::UnknownCompetitor {
            code: code.to_string(),
            context: "playoff bracket".to_string(),
        })
}
