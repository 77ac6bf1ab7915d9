use std::collections::HashSet;

use serde::Serialize;

use super::models::{Competitor, CompetitorCode, SeedPool};
use super::play_in::{PlayInRouting, PlayInSide};
use super::roster::Roster;
use crate::config::SwissSettings;
use crate::errors::{Result, SimulationError};

/// Swiss entrant with its resolved pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldEntry {
    pub code: CompetitorCode,
    pub pool: SeedPool,
}

/// Roster plus play-in routing, checked against the Swiss shape for both
/// possible play-in results. Only a validated config can be simulated.
#[derive(Debug, Clone)]
pub struct TournamentConfig {
    roster: Roster,
    play_in: PlayInRouting,
}

impl TournamentConfig {
    pub fn new(
        competitors: Vec<Competitor>,
        play_in: PlayInRouting,
        settings: &SwissSettings,
    ) -> Result<Self> {
        settings.validate()?;
        let roster = Roster::new(competitors)?;
        validate_play_in(&roster, &play_in)?;

        let config = Self { roster, play_in };
        config.check_field(settings)?;

        Ok(config)
    }

    /// Re-checks both possible Swiss fields against `settings`
    pub fn check_field(&self, settings: &SwissSettings) -> Result<()> {
        for winner in [PlayInSide::A, PlayInSide::B] {
            validate_field(&self.swiss_field(winner), settings)?;
        }
        Ok(())
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn play_in(&self) -> &PlayInRouting {
        &self.play_in
    }

    /// Fixed seeds in configuration order, followed by the routed
    /// placements, grouped by pool.
    pub fn swiss_field(&self, winner: PlayInSide) -> Vec<FieldEntry> {
        let placements = self.play_in.placements_for(winner);
        let mut field = Vec::with_capacity(self.roster.len());

        for pool in [SeedPool::One, SeedPool::Two, SeedPool::Three] {
            field.extend(
                self.roster
                    .in_pool(pool)
                    .filter(|c| !self.play_in.is_contingent(&c.code))
                    .map(|c| FieldEntry {
                        code: c.code.clone(),
                        pool,
                    }),
            );
            field.extend(
                placements
                    .iter()
                    .filter(|p| p.pool == pool)
                    .map(|p| FieldEntry {
                        code: p.code.clone(),
                        pool,
                    }),
            );
        }

        field
    }
}

fn validate_play_in(roster: &Roster, play_in: &PlayInRouting) -> Result<()> {
    if play_in.side_a == play_in.side_b {
        return Err(SimulationError::InvalidPlayIn(format!(
            "{} cannot play itself",
            play_in.side_a
        )));
    }

    roster.require(&play_in.side_a, "play-in")?;
    roster.require(&play_in.side_b, "play-in")?;

    for winner in [PlayInSide::A, PlayInSide::B] {
        let winner_code = play_in.participant(winner);
        let loser_code = play_in.participant(winner.other());
        let placements = play_in.placements_for(winner);

        for placement in placements {
            roster.require(&placement.code, "play-in routing")?;
            if placement.code == loser_code {
                return Err(SimulationError::InvalidPlayIn(format!(
                    "play-in loser {} is routed into the swiss stage",
                    loser_code
                )));
            }
        }

        if !placements.iter().any(|p| p.code == winner_code) {
            return Err(SimulationError::InvalidPlayIn(format!(
                "play-in winner {} has no pool placement",
                winner_code
            )));
        }
    }

    Ok(())
}

fn validate_field(field: &[FieldEntry], settings: &SwissSettings) -> Result<()> {
    if field.len() != settings.field_size {
        return Err(SimulationError::FieldSize {
            expected: settings.field_size,
            actual: field.len(),
        });
    }

    let mut seen = HashSet::with_capacity(field.len());
    for entry in field {
        if !seen.insert(entry.code.as_str()) {
            return Err(SimulationError::DuplicateCompetitor(entry.code.clone()));
        }
    }

    let pool_size = |pool: SeedPool| field.iter().filter(|e| e.pool == pool).count();
    let (top, middle, bottom) = (
        pool_size(SeedPool::One),
        pool_size(SeedPool::Two),
        pool_size(SeedPool::Three),
    );

    if top != bottom {
        return Err(SimulationError::PoolImbalance {
            pool: SeedPool::Three,
            expected: top,
            actual: bottom,
        });
    }
    if middle % 2 != 0 {
        return Err(SimulationError::OddPool {
            pool: SeedPool::Two,
            size: middle,
        });
    }

    Ok(())
}
