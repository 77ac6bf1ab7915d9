use serde::{Deserialize, Serialize};

use crate::errors::{Result, SimulationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeSettings {
    /// Logistic compression applied to strength differences
    pub gamma: f64,
    pub fluctuation_min: f64,
    pub fluctuation_max: f64,
}

impl Default for OutcomeSettings {
    fn default() -> Self {
        Self {
            gamma: 0.5,
            fluctuation_min: 0.90,
            fluctuation_max: 1.10, // ±10% day-of-match form
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwissSettings {
    pub field_size: usize,
    pub wins_to_qualify: u8,
    pub losses_to_eliminate: u8,
    pub max_rounds: u8,
    pub qualifier_count: usize,
    pub max_draw_attempts: usize,
}

impl Default for SwissSettings {
    fn default() -> Self {
        Self {
            field_size: Self::FIELD_SIZE,
            wins_to_qualify: 3,
            losses_to_eliminate: 3,
            max_rounds: 5,
            qualifier_count: Self::QUALIFIER_COUNT,
            max_draw_attempts: 1000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub outcome: OutcomeSettings,
    pub swiss: SwissSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            outcome: OutcomeSettings::default(),
            swiss: SwissSettings::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.outcome.validate()?;
        self.swiss.validate()
    }
}

impl OutcomeSettings {
    pub fn validate(&self) -> Result<()> {
        if !(self.gamma > 0.0 && self.gamma.is_finite()) {
            return invalid(format!("gamma must be positive, got {}", self.gamma));
        }
        if !(self.fluctuation_min > 0.0 && self.fluctuation_min <= self.fluctuation_max) {
            return invalid(format!(
                "fluctuation range [{}, {}] is not ordered and positive",
                self.fluctuation_min, self.fluctuation_max
            ));
        }
        Ok(())
    }
}

impl SwissSettings {
    /// Swiss entrants the 3-win / 3-loss structure is built for
    pub const FIELD_SIZE: usize = 16;
    /// Seeds of the fixed 1v8 / 2v7 / 3v6 / 4v5 playoff bracket
    pub const QUALIFIER_COUNT: usize = 8;

    pub fn validate(&self) -> Result<()> {
        if self.field_size != Self::FIELD_SIZE {
            return invalid(format!(
                "swiss stage needs {} entrants, got {}",
                Self::FIELD_SIZE,
                self.field_size
            ));
        }
        if self.max_draw_attempts == 0 {
            return invalid("max_draw_attempts must be at least 1".to_string());
        }
        if self.wins_to_qualify == 0 || self.losses_to_eliminate == 0 {
            return invalid("swiss thresholds must be at least 1".to_string());
        }
        if self.qualifier_count != Self::QUALIFIER_COUNT {
            return invalid(format!(
                "playoff bracket needs {} qualifiers, got {}",
                Self::QUALIFIER_COUNT,
                self.qualifier_count
            ));
        }
        Ok(())
    }
}

fn invalid(message: String) -> Result<()> {
    Err(SimulationError::InvalidSettings(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.outcome.gamma, 0.5);
        assert_eq!(config.swiss.field_size, 16);
        assert_eq!(config.swiss.max_draw_attempts, 1000);
    }

    #[test]
    fn test_rejects_bad_gamma() {
        let mut config = AppConfig::new();
        config.outcome.gamma = 0.0;
        assert!(matches!(config.validate(), Err(SimulationError::InvalidSettings(_))));
    }

    #[test]
    fn test_rejects_inverted_fluctuation() {
        let mut config = AppConfig::new();
        config.outcome.fluctuation_min = 1.2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_bracket_qualifier_count() {
        let mut config = AppConfig::new();
        config.swiss.qualifier_count = 6;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_field_other_than_sixteen() {
        let mut config = AppConfig::new();
        config.swiss.field_size = 12;
        assert!(matches!(config.validate(), Err(SimulationError::InvalidSettings(_))));
        assert!(config.swiss.validate().is_err());
    }
}
