use log::{debug, info};

use super::pairing::{draw_round_one, pair_by_record};
use super::standings::{StandingStatus, StandingsTable, SwissStanding};
use super::types::{Pairing, SwissMatch, SwissRound, SwissStageResult};
use crate::config::SwissSettings;
use crate::domain::{FieldEntry, Roster};
use crate::errors::{Result, SimulationError};
use crate::matches::{MatchSimulator, SeriesFormat};
use crate::random::RandomSource;
use crate::rating::StrengthSnapshot;

/// Runs the Swiss stage over a validated field
pub struct SwissEngine<'a> {
    roster: &'a Roster,
    strengths: &'a StrengthSnapshot,
    simulator: &'a MatchSimulator,
    settings: &'a SwissSettings,
}

/// Qualified and eliminated standings, frozen when they hit a threshold
#[derive(Default)]
struct Terminal {
    qualified: Vec<SwissStanding>,
    eliminated: Vec<SwissStanding>,
}

impl Terminal {
    fn record(&mut self, standing: &SwissStanding, settings: &SwissSettings) {
        let list = match standing.status(settings) {
            StandingStatus::Active => return,
            StandingStatus::Qualified => &mut self.qualified,
            StandingStatus::Eliminated => &mut self.eliminated,
        };
        if !list.iter().any(|s| s.code == standing.code) {
            debug!("{} finished the swiss stage at {}", standing.code, standing.record);
            list.push(standing.clone());
        }
    }
}

impl<'a> SwissEngine<'a> {
    pub fn new(
        roster: &'a Roster,
        strengths: &'a StrengthSnapshot,
        simulator: &'a MatchSimulator,
        settings: &'a SwissSettings,
    ) -> Self {
        Self {
            roster,
            strengths,
            simulator,
            settings,
        }
    }

    pub fn run<R: RandomSource + ?Sized>(&self, field: &[FieldEntry], rng: &mut R) -> Result<SwissStageResult> {
        info!("Swiss stage: {} entrants", field.len());

        let mut table = StandingsTable::new(field, self.strengths)?;
        let mut terminal = Terminal::default();
        let mut rounds = Vec::with_capacity(self.settings.max_rounds as usize);

        let draw = draw_round_one(field, self.roster, self.settings.max_draw_attempts, rng);
        let opening = self.play_round(1, &draw.pairings, &mut table, &mut terminal, rng)?;
        rounds.push(opening);

        for round in 2..=self.settings.max_rounds {
            if terminal.qualified.len() >= self.settings.qualifier_count {
                break;
            }

            let pairings = self.regular_pairings(round, &table)?;
            if pairings.is_empty() {
                break;
            }

            let played = self.play_round(round, &pairings, &mut table, &mut terminal, rng)?;
            rounds.push(played);
        }

        if terminal.qualified.len() < self.settings.qualifier_count {
            return Err(SimulationError::QualifierCount {
                expected: self.settings.qualifier_count,
                actual: terminal.qualified.len(),
            });
        }

        info!(
            "Swiss stage complete after {} rounds: {} qualified, {} eliminated",
            rounds.len(),
            terminal.qualified.len(),
            terminal.eliminated.len()
        );

        Ok(SwissStageResult {
            round_one_draw: draw,
            rounds,
            qualified: terminal.qualified,
            eliminated: terminal.eliminated,
            standings: table.into_vec(),
        })
    }

    fn regular_pairings(&self, round: u8, table: &StandingsTable) -> Result<Vec<Pairing>> {
        let active: Vec<&SwissStanding> = table.active(self.settings).collect();
        let groups = pair_by_record(round, &active, self.roster)?;

        for (record, pairings) in &groups {
            debug!("Round {}: {} pairing(s) at {}", round, pairings.len(), record);
        }

        Ok(groups.into_iter().flat_map(|(_, pairings)| pairings).collect())
    }

    fn play_round<R: RandomSource + ?Sized>(
        &self,
        round: u8,
        pairings: &[Pairing],
        table: &mut StandingsTable,
        terminal: &mut Terminal,
        rng: &mut R,
    ) -> Result<SwissRound> {
        let matches = pairings
            .iter()
            .map(|pairing| self.play_pairing(round, pairing, table, terminal, rng))
            .collect::<Result<Vec<_>>>()?;

        Ok(SwissRound {
            number: round,
            matches,
        })
    }

    fn play_pairing<R: RandomSource + ?Sized>(
        &self,
        round: u8,
        pairing: &Pairing,
        table: &mut StandingsTable,
        terminal: &mut Terminal,
        rng: &mut R,
    ) -> Result<SwissMatch> {
        let a = table.require(round, &pairing.side_a)?;
        let b = table.require(round, &pairing.side_b)?;

        let decisive = a.on_the_edge(self.settings) || b.on_the_edge(self.settings);
        let format = match_format(round, decisive);
        let (record_a, record_b) = (a.record, b.record);

        let result = self.simulator.simulate_series(
            &pairing.side_a,
            &pairing.side_b,
            a.strength,
            b.strength,
            format,
            rng,
        );

        table.apply(round, &result)?;
        for code in [&pairing.side_a, &pairing.side_b] {
            terminal.record(table.require(round, code)?, self.settings);
        }

        Ok(SwissMatch {
            round,
            record_a,
            record_b,
            decisive,
            same_region: self.roster.same_region(&pairing.side_a, &pairing.side_b),
            result,
        })
    }
}

/// Opening round is always single game; later decisive matches are best-of-3
pub fn match_format(round: u8, decisive: bool) -> SeriesFormat {
    if round > 1 && decisive {
        SeriesFormat::BestOf3
    } else {
        SeriesFormat::BestOf1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, get_competitors, get_play_in_routing};
    use crate::domain::{PlayInSide, Record, TournamentConfig};
    use crate::random::seeded;
    use crate::rating::{OutcomeModel, derive_strengths};
    use std::collections::HashSet;

    struct Fixture {
        config: TournamentConfig,
        settings: AppConfig,
    }

    impl Fixture {
        fn new() -> Self {
            let settings = AppConfig::new();
            let config = TournamentConfig::new(get_competitors(), get_play_in_routing(), &settings.swiss).unwrap();
            Self { config, settings }
        }

        fn run(&self, seed: u64, winner: PlayInSide) -> Result<SwissStageResult> {
            let mut rng = seeded(seed);
            let strengths = derive_strengths(self.config.roster(), &mut rng);
            let simulator = MatchSimulator::new(OutcomeModel::new(&self.settings.outcome));
            let engine = SwissEngine::new(self.config.roster(), &strengths, &simulator, &self.settings.swiss);
            engine.run(&self.config.swiss_field(winner), &mut rng)
        }
    }

    #[test]
    fn test_exactly_eight_qualify_and_eight_fall() {
        let fixture = Fixture::new();
        for seed in 0..200 {
            for winner in [PlayInSide::A, PlayInSide::B] {
                let stage = fixture.run(seed, winner).unwrap();
                assert_eq!(stage.qualified.len(), 8);
                assert_eq!(stage.eliminated.len(), 8);

                let qualified: HashSet<&str> = stage.qualified.iter().map(|s| s.code.as_str()).collect();
                let eliminated: HashSet<&str> = stage.eliminated.iter().map(|s| s.code.as_str()).collect();
                assert_eq!(qualified.len(), 8);
                assert!(qualified.is_disjoint(&eliminated));
            }
        }
    }

    #[test]
    fn test_round_structure() {
        let stage = Fixture::new().run(17, PlayInSide::A).unwrap();
        let sizes: Vec<usize> = stage.rounds.iter().map(|r| r.matches.len()).collect();
        assert_eq!(sizes, vec![8, 8, 8, 6, 3]);
        assert_eq!(stage.match_count(), 33);
        assert!(stage.rounds[0].matches.iter().all(|m| m.result.format == SeriesFormat::BestOf1));
        assert!(stage.rounds[0].matches.iter().all(|m| m.record_a == Record::default()));
    }

    #[test]
    fn test_pre_match_records_agree_and_decide_format() {
        let stage = Fixture::new().run(5, PlayInSide::B).unwrap();
        for round in stage.rounds.iter().skip(1) {
            for m in &round.matches {
                assert_eq!(m.record_a, m.record_b);
                let edge = m.record_a.wins == 2 || m.record_a.losses == 2;
                assert_eq!(m.decisive, edge);
                let expected = if edge { SeriesFormat::BestOf3 } else { SeriesFormat::BestOf1 };
                assert_eq!(m.result.format, expected);
            }
        }
    }

    #[test]
    fn test_terminal_competitors_are_never_paired_again() {
        let fixture = Fixture::new();
        for seed in 0..50 {
            let stage = fixture.run(seed, PlayInSide::A).unwrap();
            for standing in &stage.standings {
                let played = standing.history.len();
                let finished_at = standing
                    .history
                    .iter()
                    .position(|h| h.record_after.wins == 3 || h.record_after.losses == 3)
                    .expect("every entrant finishes");
                assert_eq!(finished_at + 1, played);
                assert_eq!(standing.record, standing.history[played - 1].record_after);
            }
        }
    }

    #[test]
    fn test_qualified_snapshots_match_final_standings() {
        let stage = Fixture::new().run(8, PlayInSide::A).unwrap();
        for q in &stage.qualified {
            assert_eq!(q.record.wins, 3);
            let live = stage.standings.iter().find(|s| s.code == q.code).unwrap();
            assert_eq!(live, q);
        }
        // 3-0 teams are recorded before anyone who needed more rounds
        let first_two: Vec<u8> = stage.qualified[..2].iter().map(|s| s.record.losses).collect();
        assert_eq!(first_two, vec![0, 0]);
    }

    #[test]
    fn test_format_rule() {
        assert_eq!(match_format(1, true), SeriesFormat::BestOf1);
        assert_eq!(match_format(2, false), SeriesFormat::BestOf1);
        assert_eq!(match_format(3, true), SeriesFormat::BestOf3);
    }
}
