use serde::{Deserialize, Serialize};

pub type CompetitorCode = String;

/// Seed pool used to constrain the first Swiss round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeedPool {
    One,
    Two,
    Three,
}

impl SeedPool {
    pub fn as_number(&self) -> u8 {
        match self {
            SeedPool::One => 1,
            SeedPool::Two => 2,
            SeedPool::Three => 3,
        }
    }
}

/// Decimal betting odds interval offered for a competitor to win the event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OddsRange {
    pub min: f64,
    pub max: f64,
}

impl OddsRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Decimal odds must be finite, above even money and ordered
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min > 1.0 && self.min <= self.max
    }

    /// Maps a unit draw onto the interval
    pub fn sample(&self, unit: f64) -> f64 {
        self.min + unit * (self.max - self.min)
    }
}

/// Static competitor entry, immutable for the lifetime of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub code: CompetitorCode,
    pub name: String,
    pub region: String,
    pub odds: OddsRange,
    pub pool: SeedPool,
}

impl Competitor {
    pub fn new(code: &str, name: &str, region: &str, odds: (f64, f64), pool: SeedPool) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            region: region.to_string(),
            odds: OddsRange::new(odds.0, odds.1),
            pool,
        }
    }
}

/// Running win-loss record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub wins: u8,
    pub losses: u8,
}

impl Record {
    pub fn new(wins: u8, losses: u8) -> Self {
        Self { wins, losses }
    }

    pub fn label(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }

    pub fn after_win(self) -> Self {
        Self {
            wins: self.wins + 1,
            ..self
        }
    }

    pub fn after_loss(self) -> Self {
        Self {
            losses: self.losses + 1,
            ..self
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.wins, self.losses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odds_validation() {
        assert!(OddsRange::new(2.1, 2.4).is_valid());
        assert!(OddsRange::new(3.0, 3.0).is_valid());
        assert!(!OddsRange::new(3.0, 2.0).is_valid());
        assert!(!OddsRange::new(0.0, 2.0).is_valid());
        assert!(!OddsRange::new(-1.0, 2.0).is_valid());
        assert!(!OddsRange::new(1.5, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_odds_sampling_spans_interval() {
        let odds = OddsRange::new(4.0, 6.0);
        assert_eq!(odds.sample(0.0), 4.0);
        assert_eq!(odds.sample(0.5), 5.0);
        assert!(odds.sample(0.999) < 6.0);
    }

    #[test]
    fn test_record_transitions() {
        let record = Record::default().after_win().after_loss().after_win();
        assert_eq!(record, Record::new(2, 1));
        assert_eq!(record.label(), "2-1");
    }
}
