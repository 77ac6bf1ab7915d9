use std::collections::HashMap;

use serde::Serialize;

use crate::config::SwissSettings;
use crate::domain::{CompetitorCode, FieldEntry, Record, SeedPool};
use crate::errors::{Result, SimulationError};
use crate::matches::{MatchResult, SeriesFormat};
use crate::rating::{StrengthSnapshot, StrengthValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Win,
    Loss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StandingStatus {
    Active,
    Qualified,
    Eliminated,
}

/// One Swiss match from a single competitor's point of view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub round: u8,
    pub opponent: CompetitorCode,
    pub outcome: Outcome,
    /// Own games won, opponent games won
    pub score: (u8, u8),
    pub format: SeriesFormat,
    pub record_after: Record,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwissStanding {
    pub code: CompetitorCode,
    pub pool: SeedPool,
    pub strength: StrengthValue,
    pub record: Record,
    pub history: Vec<HistoryEntry>,
}

impl SwissStanding {
    pub fn new(code: &str, pool: SeedPool, strength: StrengthValue) -> Self {
        Self {
            code: code.to_string(),
            pool,
            strength,
            record: Record::default(),
            history: Vec::new(),
        }
    }

    /// New standing with the match folded in; `self` is left untouched
    pub fn with_result(&self, round: u8, result: &MatchResult) -> Self {
        let won = result.winner == self.code;
        let record = if won {
            self.record.after_win()
        } else {
            self.record.after_loss()
        };
        let opponent = if result.side_a == self.code {
            &result.side_b
        } else {
            &result.side_a
        };

        let mut history = self.history.clone();
        history.push(HistoryEntry {
            round,
            opponent: opponent.clone(),
            outcome: if won { Outcome::Win } else { Outcome::Loss },
            score: result.score_for(&self.code),
            format: result.format,
            record_after: record,
        });

        Self {
            record,
            history,
            ..self.clone()
        }
    }

    pub fn status(&self, settings: &SwissSettings) -> StandingStatus {
        if self.record.wins >= settings.wins_to_qualify {
            StandingStatus::Qualified
        } else if self.record.losses >= settings.losses_to_eliminate {
            StandingStatus::Eliminated
        } else {
            StandingStatus::Active
        }
    }

    /// One more result qualifies or eliminates this competitor
    pub fn on_the_edge(&self, settings: &SwissSettings) -> bool {
        self.record.wins + 1 == settings.wins_to_qualify
            || self.record.losses + 1 == settings.losses_to_eliminate
    }
}

/// Live standings keyed by competitor code, iterated in field order
#[derive(Debug, Clone)]
pub struct StandingsTable {
    order: Vec<CompetitorCode>,
    standings: HashMap<CompetitorCode, SwissStanding>,
}

impl StandingsTable {
    pub fn new(field: &[FieldEntry], strengths: &StrengthSnapshot) -> Result<Self> {
        let mut order = Vec::with_capacity(field.len());
        let mut standings = HashMap::with_capacity(field.len());

        for entry in field {
            let strength = strengths.strength_of(&entry.code).ok_or_else(|| {
                SimulationError::UnknownCompetitor {
                    code: entry.code.clone(),
                    context: "strength snapshot".to_string(),
                }
            })?;
            order.push(entry.code.clone());
            standings.insert(
                entry.code.clone(),
                SwissStanding::new(&entry.code, entry.pool, strength),
            );
        }

        Ok(Self { order, standings })
    }

    pub fn get(&self, code: &str) -> Option<&SwissStanding> {
        self.standings.get(code)
    }

    /// Lookup that treats a missing code as a broken pairing
    pub fn require(&self, round: u8, code: &str) -> Result<&SwissStanding> {
        self.standings
            .get(code)
            .ok_or_else(|| SimulationError::UnpairedCompetitor {
                round,
                code: code.to_string(),
            })
    }

    pub fn active<'a>(&'a self, settings: &'a SwissSettings) -> impl Iterator<Item = &'a SwissStanding> + 'a {
        self.iter()
            .filter(move |s| s.status(settings) == StandingStatus::Active)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SwissStanding> {
        self.order.iter().filter_map(|code| self.standings.get(code))
    }

    /// Folds a finished match into both sides' standings
    pub fn apply(&mut self, round: u8, result: &MatchResult) -> Result<()> {
        let a = self.require(round, &result.side_a)?.with_result(round, result);
        let b = self.require(round, &result.side_b)?.with_result(round, result);
        self.standings.insert(a.code.clone(), a);
        self.standings.insert(b.code.clone(), b);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn into_vec(self) -> Vec<SwissStanding> {
        let Self { order, mut standings } = self;
        order
            .iter()
            .filter_map(|code| standings.remove(code))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matches::Score;
    use crate::rating::CompetitorStrength;

    fn snapshot(codes: &[&str]) -> StrengthSnapshot {
        let entries = codes
            .iter()
            .enumerate()
            .map(|(i, code)| CompetitorStrength {
                code: code.to_string(),
                sampled_odds: 2.0,
                implied_probability: 0.5,
                normalized_probability: 0.5,
                normalized_odds: 2.0,
                strength: -(i as f64),
            })
            .collect();
        StrengthSnapshot::new(entries, 1.0)
    }

    fn result(a: &str, b: &str, winner: &str, score: Score) -> MatchResult {
        MatchResult {
            side_a: a.to_string(),
            side_b: b.to_string(),
            format: SeriesFormat::BestOf3,
            games: Vec::new(),
            score,
            winner: winner.to_string(),
            base_game_probability: 0.5,
            theoretical_series_probability: 0.5,
        }
    }

    fn field(codes: &[&str]) -> Vec<FieldEntry> {
        codes
            .iter()
            .map(|c| FieldEntry {
                code: c.to_string(),
                pool: SeedPool::Two,
            })
            .collect()
    }

    #[test]
    fn test_with_result_is_pure() {
        let standing = SwissStanding::new("A", SeedPool::One, -1.0);
        let next = standing.with_result(2, &result("A", "B", "B", Score { a: 1, b: 2 }));
        assert_eq!(standing.record, Record::default());
        assert!(standing.history.is_empty());
        assert_eq!(next.record, Record::new(0, 1));
        assert_eq!(next.history[0].opponent, "B");
        assert_eq!(next.history[0].outcome, Outcome::Loss);
        assert_eq!(next.history[0].score, (1, 2));
        assert_eq!(next.history[0].record_after, Record::new(0, 1));
    }

    #[test]
    fn test_status_thresholds() {
        let settings = SwissSettings::default();
        let mut standing = SwissStanding::new("A", SeedPool::One, 0.0);
        standing.record = Record::new(2, 2);
        assert_eq!(standing.status(&settings), StandingStatus::Active);
        assert!(standing.on_the_edge(&settings));
        standing.record = Record::new(3, 1);
        assert_eq!(standing.status(&settings), StandingStatus::Qualified);
        standing.record = Record::new(1, 3);
        assert_eq!(standing.status(&settings), StandingStatus::Eliminated);
        standing.record = Record::new(1, 1);
        assert!(!standing.on_the_edge(&settings));
    }

    #[test]
    fn test_apply_updates_both_sides() {
        let codes = ["A", "B", "C"];
        let mut table = StandingsTable::new(&field(&codes), &snapshot(&codes)).unwrap();
        table.apply(1, &result("A", "C", "A", Score { a: 2, b: 0 })).unwrap();
        assert_eq!(table.get("A").unwrap().record, Record::new(1, 0));
        assert_eq!(table.get("C").unwrap().record, Record::new(0, 1));
        assert_eq!(table.get("B").unwrap().record, Record::default());
        assert_eq!(table.get("C").unwrap().strength, -2.0);
    }

    #[test]
    fn test_apply_rejects_unknown_code() {
        let codes = ["A", "B"];
        let mut table = StandingsTable::new(&field(&codes), &snapshot(&codes)).unwrap();
        let err = table.apply(3, &result("A", "Z", "A", Score { a: 1, b: 0 })).unwrap_err();
        assert_eq!(
            err,
            SimulationError::UnpairedCompetitor {
                round: 3,
                code: "Z".to_string()
            }
        );
        assert_eq!(table.get("A").unwrap().record, Record::default());
    }

    #[test]
    fn test_active_skips_terminal_standings() {
        let settings = SwissSettings::default();
        let codes = ["A", "B", "C", "D"];
        let mut table = StandingsTable::new(&field(&codes), &snapshot(&codes)).unwrap();
        for round in 1..=3 {
            table.apply(round, &result("A", "B", "A", Score { a: 1, b: 0 })).unwrap();
        }
        let active: Vec<&str> = table.active(&settings).map(|s| s.code.as_str()).collect();
        assert_eq!(active, vec!["C", "D"]);
        let all: Vec<String> = table.into_vec().into_iter().map(|s| s.code).collect();
        assert_eq!(all, vec!["A", "B", "C", "D"]);
    }
}
