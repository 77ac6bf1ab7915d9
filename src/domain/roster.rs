use std::collections::HashMap;

use super::models::{Competitor, SeedPool};
use crate::errors::{Result, SimulationError};

/// Validated, ordered set of competitors indexed by code
#[derive(Debug, Clone)]
pub struct Roster {
    competitors: Vec<Competitor>,
    index: HashMap<String, usize>,
}

impl Roster {
    pub fn new(competitors: Vec<Competitor>) -> Result<Self> {
        if competitors.is_empty() {
            return Err(SimulationError::EmptyRoster);
        }

        let mut index = HashMap::with_capacity(competitors.len());
        for (idx, competitor) in competitors.iter().enumerate() {
            validate_odds(competitor)?;
            if index.insert(competitor.code.clone(), idx).is_some() {
                return Err(SimulationError::DuplicateCompetitor(competitor.code.clone()));
            }
        }

        Ok(Self { competitors, index })
    }

    pub fn get(&self, code: &str) -> Option<&Competitor> {
        self.index.get(code).map(|&idx| &self.competitors[idx])
    }

    pub fn require(&self, code: &str, context: &str) -> Result<&Competitor> {
        self.get(code).ok_or_else(|| SimulationError::UnknownCompetitor {
            code: code.to_string(),
            context: context.to_string(),
        })
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Position in configuration order, used as a stable tie-break
    pub fn position(&self, code: &str) -> Option<usize> {
        self.index.get(code).copied()
    }

    pub fn same_region(&self, a: &str, b: &str) -> bool {
        match (self.get(a), self.get(b)) {
            (Some(x), Some(y)) => x.region == y.region,
            _ => false,
        }
    }

    pub fn in_pool(&self, pool: SeedPool) -> impl Iterator<Item = &Competitor> {
        self.competitors.iter().filter(move |c| c.pool == pool)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Competitor> {
        self.competitors.iter()
    }

    pub fn len(&self) -> usize {
        self.competitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty()
    }
}

fn validate_odds(competitor: &Competitor) -> Result<()> {
    if competitor.odds.is_valid() {
        Ok(())
    } else {
        Err(SimulationError::InvalidOdds {
            code: competitor.code.clone(),
            min: competitor.odds.min,
            max: competitor.odds.max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Competitor> {
        vec![
            Competitor::new("AAA", "Alpha", "EU", (2.0, 3.0), SeedPool::One),
            Competitor::new("BBB", "Bravo", "NA", (4.0, 5.0), SeedPool::Two),
            Competitor::new("CCC", "Charlie", "EU", (6.0, 9.0), SeedPool::Three),
        ]
    }

    #[test]
    fn test_lookup_and_order() {
        let roster = Roster::new(sample()).unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.get("BBB").map(|c| c.name.as_str()), Some("Bravo"));
        assert_eq!(roster.position("CCC"), Some(2));
        assert!(roster.same_region("AAA", "CCC"));
        assert!(!roster.same_region("AAA", "BBB"));
        assert!(!roster.same_region("AAA", "ZZZ"));
        assert_eq!(roster.in_pool(SeedPool::Two).count(), 1);
    }

    #[test]
    fn test_rejects_empty_roster() {
        assert_eq!(Roster::new(Vec::new()).unwrap_err(), SimulationError::EmptyRoster);
    }

    #[test]
    fn test_rejects_duplicate_codes() {
        let mut competitors = sample();
        competitors.push(Competitor::new("AAA", "Again", "KR", (2.0, 2.5), SeedPool::One));
        assert_eq!(
            Roster::new(competitors).unwrap_err(),
            SimulationError::DuplicateCompetitor("AAA".to_string())
        );
    }

    #[test]
    fn test_rejects_inverted_odds() {
        let mut competitors = sample();
        competitors[1].odds.min = 9.0;
        let err = Roster::new(competitors).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidOdds { ref code, .. } if code == "BBB"));
    }

    #[test]
    fn test_rejects_non_positive_odds() {
        let mut competitors = sample();
        competitors[0].odds.min = 0.0;
        assert!(matches!(
            Roster::new(competitors),
            Err(SimulationError::InvalidOdds { .. })
        ));
    }

    #[test]
    fn test_require_reports_context() {
        let roster = Roster::new(sample()).unwrap();
        let err = roster.require("XYZ", "play-in").unwrap_err();
        assert_eq!(
            err,
            SimulationError::UnknownCompetitor {
                code: "XYZ".to_string(),
                context: "play-in".to_string()
            }
        );
    }
}
