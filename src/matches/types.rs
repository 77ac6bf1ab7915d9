use serde::{Deserialize, Serialize};

use crate::domain::CompetitorCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesFormat {
    BestOf1,
    BestOf3,
    BestOf5,
}

impl SeriesFormat {
    pub fn games(&self) -> u8 {
        match self {
            SeriesFormat::BestOf1 => 1,
            SeriesFormat::BestOf3 => 3,
            SeriesFormat::BestOf5 => 5,
        }
    }

    pub fn wins_needed(&self) -> u8 {
        self.games() / 2 + 1
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeriesFormat::BestOf1 => "BO1",
            SeriesFormat::BestOf3 => "BO3",
            SeriesFormat::BestOf5 => "BO5",
        }
    }
}

/// One game inside a series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRecord {
    pub winner: CompetitorCode,
    /// Fluctuated probability that side a wins this game
    pub side_a_probability: f64,
    /// Probability the actual winner had going into this game
    pub winner_probability: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub a: u8,
    pub b: u8,
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// Completed series between two competitors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub side_a: CompetitorCode,
    pub side_b: CompetitorCode,
    pub format: SeriesFormat,
    pub games: Vec<GameRecord>,
    pub score: Score,
    pub winner: CompetitorCode,
    /// Fluctuation-free single game probability for side a
    pub base_game_probability: f64,
    /// Closed-form series probability for side a; reference only
    pub theoretical_series_probability: f64,
}

impl MatchResult {
    pub fn loser(&self) -> &str {
        if self.winner == self.side_a {
            &self.side_b
        } else {
            &self.side_a
        }
    }

    pub fn side_a_won(&self) -> bool {
        self.winner == self.side_a
    }

    /// Score from the perspective of `code`, as (own, opponent)
    pub fn score_for(&self, code: &str) -> (u8, u8) {
        if code == self.side_a {
            (self.score.a, self.score.b)
        } else {
            (self.score.b, self.score.a)
        }
    }
}
