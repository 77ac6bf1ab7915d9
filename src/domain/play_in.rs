use serde::{Deserialize, Serialize};

use super::models::{CompetitorCode, SeedPool};

/// Which side of the play-in match won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayInSide {
    A,
    B,
}

impl PlayInSide {
    pub fn other(&self) -> Self {
        match self {
            PlayInSide::A => PlayInSide::B,
            PlayInSide::B => PlayInSide::A,
        }
    }
}

/// A competitor routed into a Swiss pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub code: CompetitorCode,
    pub pool: SeedPool,
}

impl Placement {
    pub fn new(code: &str, pool: SeedPool) -> Self {
        Self {
            code: code.to_string(),
            pool,
        }
    }
}

/// Routing table keyed on which play-in side wins.
///
/// Each entry lists every competitor whose pool depends on the play-in,
/// including the play-in winner itself. The loser is not placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayInRouting {
    pub side_a: CompetitorCode,
    pub side_b: CompetitorCode,
    pub on_side_a_win: Vec<Placement>,
    pub on_side_b_win: Vec<Placement>,
}

impl PlayInRouting {
    pub fn participant(&self, side: PlayInSide) -> &str {
        match side {
            PlayInSide::A => &self.side_a,
            PlayInSide::B => &self.side_b,
        }
    }

    pub fn side_of(&self, code: &str) -> Option<PlayInSide> {
        if code == self.side_a {
            Some(PlayInSide::A)
        } else if code == self.side_b {
            Some(PlayInSide::B)
        } else {
            None
        }
    }

    pub fn placements_for(&self, winner: PlayInSide) -> &[Placement] {
        match winner {
            PlayInSide::A => &self.on_side_a_win,
            PlayInSide::B => &self.on_side_b_win,
        }
    }

    /// Codes whose Swiss entry depends on the play-in result
    pub fn is_contingent(&self, code: &str) -> bool {
        self.side_of(code).is_some()
            || self
                .on_side_a_win
                .iter()
                .chain(self.on_side_b_win.iter())
                .any(|p| p.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routing() -> PlayInRouting {
        PlayInRouting {
            side_a: "iG".to_string(),
            side_b: "T1".to_string(),
            on_side_a_win: vec![
                Placement::new("TES", SeedPool::Two),
                Placement::new("KT", SeedPool::Three),
                Placement::new("iG", SeedPool::Three),
            ],
            on_side_b_win: vec![
                Placement::new("KT", SeedPool::Two),
                Placement::new("TES", SeedPool::Three),
                Placement::new("T1", SeedPool::Three),
            ],
        }
    }

    #[test]
    fn test_lookup_by_winning_side() {
        let routing = routing();
        let a = routing.placements_for(PlayInSide::A);
        assert_eq!(a[0], Placement::new("TES", SeedPool::Two));
        let b = routing.placements_for(PlayInSide::B);
        assert_eq!(b[0], Placement::new("KT", SeedPool::Two));
        assert!(b.iter().any(|p| p.code == "T1"));
        assert!(!b.iter().any(|p| p.code == "iG"));
    }

    #[test]
    fn test_sides() {
        let routing = routing();
        assert_eq!(routing.participant(PlayInSide::B), "T1");
        assert_eq!(routing.side_of("iG"), Some(PlayInSide::A));
        assert_eq!(routing.side_of("GEN"), None);
        assert_eq!(PlayInSide::A.other(), PlayInSide::B);
    }

    #[test]
    fn test_contingent_codes() {
        let routing = routing();
        for code in ["iG", "T1", "TES", "KT"] {
            assert!(routing.is_contingent(code), "{code}");
        }
        assert!(!routing.is_contingent("GEN"));
    }
}
