use serde::Serialize;

use super::standings::SwissStanding;
use crate::domain::{CompetitorCode, Record};
use crate::matches::MatchResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub side_a: CompetitorCode,
    pub side_b: CompetitorCode,
}

impl Pairing {
    pub fn new(side_a: &str, side_b: &str) -> Self {
        Self {
            side_a: side_a.to_string(),
            side_b: side_b.to_string(),
        }
    }
}

/// Outcome of the region-avoiding first round draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundOneDraw {
    pub pairings: Vec<Pairing>,
    pub attempts: usize,
    pub constraint_satisfied: bool,
    /// Same-region pairings left in the accepted draw
    pub region_clashes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwissMatch {
    pub round: u8,
    pub record_a: Record,
    pub record_b: Record,
    pub decisive: bool,
    pub same_region: bool,
    pub result: MatchResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwissRound {
    pub number: u8,
    pub matches: Vec<SwissMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwissStageResult {
    pub round_one_draw: RoundOneDraw,
    pub rounds: Vec<SwissRound>,
    /// In the order competitors reached the win threshold
    pub qualified: Vec<SwissStanding>,
    pub eliminated: Vec<SwissStanding>,
    /// Every entrant's final standing, in field order
    pub standings: Vec<SwissStanding>,
}

impl SwissStageResult {
    pub fn qualified_codes(&self) -> Vec<&str> {
        self.qualified.iter().map(|s| s.code.as_str()).collect()
    }

    pub fn match_count(&self) -> usize {
        self.rounds.iter().map(|r| r.matches.len()).sum()
    }
}
