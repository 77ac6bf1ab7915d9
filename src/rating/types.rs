use std::collections::HashMap;

use serde::Serialize;

use crate::domain::CompetitorCode;

pub type StrengthValue = f64;

/// Per-competitor values derived from one odds draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitorStrength {
    pub code: CompetitorCode,
    pub sampled_odds: f64,
    pub implied_probability: f64,
    pub normalized_probability: f64,
    pub normalized_odds: f64,
    pub strength: StrengthValue,
}

/// Strengths for the whole roster, created once per run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthSnapshot {
    entries: Vec<CompetitorStrength>,
    /// Sum of implied probabilities before normalization (bookmaker overround)
    pub overround: f64,
    #[serde(skip)]
    index: HashMap<CompetitorCode, usize>,
}

impl StrengthSnapshot {
    pub fn new(entries: Vec<CompetitorStrength>, overround: f64) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(idx, e)| (e.code.clone(), idx))
            .collect();

        Self {
            entries,
            overround,
            index,
        }
    }

    pub fn get(&self, code: &str) -> Option<&CompetitorStrength> {
        self.index.get(code).map(|&idx| &self.entries[idx])
    }

    pub fn strength_of(&self, code: &str) -> Option<StrengthValue> {
        self.get(code).map(|e| e.strength)
    }

    pub fn entries(&self) -> &[CompetitorStrength] {
        &self.entries
    }

    pub fn total_probability(&self) -> f64 {
        self.entries.iter().map(|e| e.normalized_probability).sum()
    }

    /// Entries ordered strongest first
    pub fn ranked(&self) -> Vec<&CompetitorStrength> {
        let mut ranked: Vec<&CompetitorStrength> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.strength.total_cmp(&a.strength));
        ranked
    }
}
