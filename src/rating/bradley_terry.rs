use super::types::StrengthValue;
use crate::config::OutcomeSettings;
use crate::random::RandomSource;

/// Bradley-Terry style pairwise model: a single game is won with
/// probability `sigmoid(gamma * (s_a - s_b))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeModel {
    gamma: f64,
    fluctuation_min: f64,
    fluctuation_max: f64,
}

impl OutcomeModel {
    pub fn new(settings: &OutcomeSettings) -> Self {
        Self {
            gamma: settings.gamma,
            fluctuation_min: settings.fluctuation_min,
            fluctuation_max: settings.fluctuation_max,
        }
    }

    /// Fluctuation-free single game probability that `a` beats `b`
    pub fn game_win_probability(&self, strength_a: StrengthValue, strength_b: StrengthValue) -> f64 {
        let x = self.gamma * (strength_a - strength_b);
        1.0 / (1.0 + (-x).exp())
    }

    /// Day-of-match form: scales a strength by a fresh uniform factor
    pub fn fluctuate<R: RandomSource + ?Sized>(&self, strength: StrengthValue, rng: &mut R) -> StrengthValue {
        let factor = self.fluctuation_min + rng.next_unit() * (self.fluctuation_max - self.fluctuation_min);
        strength * factor
    }

    /// Probability for one concrete game; both sides are re-fluctuated on every call
    pub fn effective_game_probability<R: RandomSource + ?Sized>(
        &self,
        strength_a: StrengthValue,
        strength_b: StrengthValue,
        rng: &mut R,
    ) -> f64 {
        let a = self.fluctuate(strength_a, rng);
        let b = self.fluctuate(strength_b, rng);
        self.game_win_probability(a, b)
    }
}

impl Default for OutcomeModel {
    fn default() -> Self {
        Self::new(&OutcomeSettings::default())
    }
}
