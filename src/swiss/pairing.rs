use std::cmp::Reverse;
use std::collections::BTreeMap;

use log::{debug, warn};

use super::standings::SwissStanding;
use super::types::{Pairing, RoundOneDraw};
use crate::domain::{FieldEntry, Record, Roster, SeedPool};
use crate::errors::{Result, SimulationError};
use crate::random::{self, RandomSource};

/// First round draw: pool 1 meets pool 3, pool 2 plays within itself.
///
/// Whole draws are generated and rejected until one contains no same-region
/// pairing. After `max_attempts` the last draw is accepted as is and the
/// result is flagged.
pub fn draw_round_one<R: RandomSource + ?Sized>(
    field: &[FieldEntry],
    roster: &Roster,
    max_attempts: usize,
    rng: &mut R,
) -> RoundOneDraw {
    let top = codes_in_pool(field, SeedPool::One);
    let middle = codes_in_pool(field, SeedPool::Two);
    let bottom = codes_in_pool(field, SeedPool::Three);

    let mut attempts = 0;
    let mut pairings = Vec::new();
    let mut clashes = 0;

    while attempts < max_attempts.max(1) {
        attempts += 1;
        pairings = random_bijection(&top, &bottom, rng);
        pairings.extend(random_matching(&middle, rng));
        clashes = count_region_clashes(&pairings, roster);
        if clashes == 0 {
            break;
        }
    }

    let constraint_satisfied = clashes == 0;
    if constraint_satisfied {
        debug!("Round 1 draw accepted after {} attempt(s)", attempts);
    } else {
        warn!(
            "Round 1 draw kept {} same-region pairing(s) after {} attempts",
            clashes, attempts
        );
    }

    RoundOneDraw {
        pairings,
        attempts,
        constraint_satisfied,
        region_clashes: clashes,
    }
}

fn codes_in_pool(field: &[FieldEntry], pool: SeedPool) -> Vec<&str> {
    field
        .iter()
        .filter(|e| e.pool == pool)
        .map(|e| e.code.as_str())
        .collect()
}

/// Uniform random one-to-one assignment of `bottom` onto `top`
fn random_bijection<R: RandomSource + ?Sized>(top: &[&str], bottom: &[&str], rng: &mut R) -> Vec<Pairing> {
    let mut shuffled = bottom.to_vec();
    random::shuffle(&mut shuffled, rng);
    top.iter()
        .zip(shuffled)
        .map(|(a, b)| Pairing::new(a, b))
        .collect()
}

/// Uniform random perfect matching of an even-sized group
fn random_matching<R: RandomSource + ?Sized>(group: &[&str], rng: &mut R) -> Vec<Pairing> {
    let mut shuffled = group.to_vec();
    random::shuffle(&mut shuffled, rng);
    shuffled
        .chunks_exact(2)
        .map(|pair| Pairing::new(pair[0], pair[1]))
        .collect()
}

pub fn count_region_clashes(pairings: &[Pairing], roster: &Roster) -> usize {
    pairings
        .iter()
        .filter(|p| roster.same_region(&p.side_a, &p.side_b))
        .count()
}

/// Later rounds: group by record, strongest first within a group, pair
/// neighbours. Groups are visited from the most wins down, then fewest losses.
pub fn pair_by_record(
    round: u8,
    active: &[&SwissStanding],
    roster: &Roster,
) -> Result<Vec<(Record, Vec<Pairing>)>> {
    let mut groups: BTreeMap<(Reverse<u8>, u8), Vec<&SwissStanding>> = BTreeMap::new();
    for standing in active {
        groups
            .entry((Reverse(standing.record.wins), standing.record.losses))
            .or_default()
            .push(*standing);
    }

    groups
        .into_values()
        .map(|group| pair_group(round, group, roster))
        .collect()
}

fn pair_group(
    round: u8,
    mut group: Vec<&SwissStanding>,
    roster: &Roster,
) -> Result<(Record, Vec<Pairing>)> {
    let record = group[0].record;

    if group.len() % 2 != 0 {
        return Err(SimulationError::OddRecordGroup {
            round,
            record: record.label(),
            size: group.len(),
        });
    }

    group.sort_by(|a, b| {
        b.strength
            .total_cmp(&a.strength)
            .then_with(|| roster.position(&a.code).cmp(&roster.position(&b.code)))
    });

    let pairings = group
        .chunks_exact(2)
        .map(|pair| Pairing::new(&pair[0].code, &pair[1].code))
        .collect();

    Ok((record, pairings))
}
