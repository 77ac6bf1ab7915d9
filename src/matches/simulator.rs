use log::debug;

use super::probability::series_win_probability;
use super::types::{GameRecord, MatchResult, Score, SeriesFormat};
use crate::rating::{OutcomeModel, StrengthValue};
use crate::random::RandomSource;

/// Plays games and series on top of an `OutcomeModel`
#[derive(Debug, Clone, Copy)]
pub struct MatchSimulator {
    model: OutcomeModel,
}

impl MatchSimulator {
    pub fn new(model: OutcomeModel) -> Self {
        Self { model }
    }

    /// One game with freshly fluctuated strengths
    pub fn simulate_game<R: RandomSource + ?Sized>(
        &self,
        side_a: &str,
        side_b: &str,
        strength_a: StrengthValue,
        strength_b: StrengthValue,
        rng: &mut R,
    ) -> GameRecord {
        let p = self.model.effective_game_probability(strength_a, strength_b, rng);
        let a_wins = rng.next_unit() < p;

        let (winner, winner_probability) = if a_wins {
            (side_a, p)
        } else {
            (side_b, 1.0 - p)
        };

        GameRecord {
            winner: winner.to_string(),
            side_a_probability: p,
            winner_probability,
        }
    }

    /// Plays games until one side reaches the format's win target.
    ///
    /// Each game scores exactly one side, so the loop ends after at most
    /// `2 * wins_needed - 1` games.
    pub fn simulate_series<R: RandomSource + ?Sized>(
        &self,
        side_a: &str,
        side_b: &str,
        strength_a: StrengthValue,
        strength_b: StrengthValue,
        format: SeriesFormat,
        rng: &mut R,
    ) -> MatchResult {
        let wins_needed = format.wins_needed();
        let mut score = Score::default();
        let mut games = Vec::with_capacity(format.games() as usize);

        while score.a < wins_needed && score.b < wins_needed {
            let game = self.simulate_game(side_a, side_b, strength_a, strength_b, rng);
            if game.winner == side_a {
                score.a += 1;
            } else {
                score.b += 1;
            }
            games.push(game);
        }

        let winner = if score.a == wins_needed { side_a } else { side_b };
        let base = self.model.game_win_probability(strength_a, strength_b);
        debug!(
            "{} {} vs {}: {} ({}) winner {}",
            format.label(),
            side_a,
            side_b,
            score,
            games.len(),
            winner
        );

        MatchResult {
            side_a: side_a.to_string(),
            side_b: side_b.to_string(),
            format,
            games,
            score,
            winner: winner.to_string(),
            base_game_probability: base,
            theoretical_series_probability: series_win_probability(format, base),
        }
    }
}

impl Default for MatchSimulator {
    fn default() -> Self {
        Self::new(OutcomeModel::default())
    }
}
