use log::debug;

use super::types::{CompetitorStrength, StrengthSnapshot};
use crate::domain::{Competitor, Roster};
use crate::random::RandomSource;

/// Draws one odds value per competitor and turns the field into strengths.
///
/// Implied probabilities are normalized to remove the bookmaker overround, so
/// they form a distribution over who wins the event. The strength is
/// `ln(normalized probability)`, i.e. `-ln(normalized odds)`.
pub fn derive_strengths<R: RandomSource + ?Sized>(roster: &Roster, rng: &mut R) -> StrengthSnapshot {
    let sampled: Vec<(&Competitor, f64)> = roster
        .iter()
        .map(|c| (c, c.odds.sample(rng.next_unit())))
        .collect();

    let overround: f64 = sampled.iter().map(|(_, odds)| implied_probability(*odds)).sum();
    debug!("Sampled odds for {} competitors, overround {:.4}", sampled.len(), overround);

    let entries = sampled
        .into_iter()
        .map(|(competitor, odds)| build_entry(competitor, odds, overround))
        .collect();

    StrengthSnapshot::new(entries, overround)
}

fn implied_probability(odds: f64) -> f64 {
    1.0 / odds
}

fn build_entry(competitor: &Competitor, odds: f64, overround: f64) -> CompetitorStrength {
    let implied = implied_probability(odds);
    let normalized_probability = implied / overround;
    let normalized_odds = 1.0 / normalized_probability;

    CompetitorStrength {
        code: competitor.code.clone(),
        sampled_odds: odds,
        implied_probability: implied,
        normalized_probability,
        normalized_odds,
        strength: -normalized_odds.ln(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::get_competitors;
    use crate::domain::SeedPool;
    use crate::random::seeded;
    use crate::random::testing::ScriptedRandom;
    use proptest::prelude::*;

    fn roster() -> Roster {
        Roster::new(get_competitors()).unwrap()
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let snapshot = derive_strengths(&roster(), &mut seeded(1));
        assert!((snapshot.total_probability() - 1.0).abs() < 1e-9);
        assert!(snapshot.overround > 1.0);
    }

    #[test]
    fn test_sampled_odds_stay_in_range() {
        let roster = roster();
        let snapshot = derive_strengths(&roster, &mut seeded(99));
        for entry in snapshot.entries() {
            let odds = roster.get(&entry.code).unwrap().odds;
            assert!(entry.sampled_odds >= odds.min && entry.sampled_odds <= odds.max);
        }
    }

    #[test]
    fn test_strength_is_log_of_normalized_probability() {
        let snapshot = derive_strengths(&roster(), &mut seeded(3));
        for entry in snapshot.entries() {
            assert!((entry.strength - entry.normalized_probability.ln()).abs() < 1e-12);
            assert!((entry.normalized_odds * entry.normalized_probability - 1.0).abs() < 1e-12);
            assert!(entry.strength < 0.0);
        }
    }

    #[test]
    fn test_shorter_odds_mean_higher_strength() {
        // With every draw at the interval minimum, ordering follows min odds
        let snapshot = derive_strengths(&roster(), &mut ScriptedRandom::constant(0.0));
        let gen_g = snapshot.strength_of("GEN").unwrap();
        let hle = snapshot.strength_of("HLE").unwrap();
        let vks = snapshot.strength_of("VKS").unwrap();
        assert!(gen_g > hle);
        assert!(hle > vks);
        assert_eq!(snapshot.ranked()[0].code, "GEN");
    }

    #[test]
    fn test_two_equal_competitors_split_evenly() {
        let roster = Roster::new(vec![
            Competitor::new("A", "A", "X", (2.0, 2.0), SeedPool::One),
            Competitor::new("B", "B", "Y", (2.0, 2.0), SeedPool::Three),
        ])
        .unwrap();
        let snapshot = derive_strengths(&roster, &mut seeded(5));
        assert!((snapshot.get("A").unwrap().normalized_probability - 0.5).abs() < 1e-12);
        assert!((snapshot.strength_of("B").unwrap() - 0.5f64.ln()).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_normalized_probabilities_sum_to_one(
            ranges in prop::collection::vec((1.01f64..50.0, 0.0f64..200.0), 1..40),
            seed in any::<u64>(),
        ) {
            let competitors = ranges
                .iter()
                .enumerate()
                .map(|(i, (min, spread))| {
                    Competitor::new(&format!("C{i}"), "c", "R", (*min, min + spread), SeedPool::Two)
                })
                .collect();
            let roster = Roster::new(competitors).unwrap();
            let snapshot = derive_strengths(&roster, &mut seeded(seed));
            prop_assert!((snapshot.total_probability() - 1.0).abs() < 1e-9);
        }
    }
}
