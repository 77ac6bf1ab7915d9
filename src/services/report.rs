use colored::Colorize;

use crate::bracket::BracketRunResult;
use crate::domain::{PlayInRouting, Roster};
use crate::matches::MatchResult;
use crate::services::monte_carlo::MonteCarloSummary;
use crate::swiss::SwissStanding;

fn name_of<'a>(roster: &'a Roster, code: &'a str) -> &'a str {
    roster.get(code).map(|c| c.name.as_str()).unwrap_or(code)
}

fn match_line(result: &MatchResult, roster: &Roster) -> String {
    let a = name_of(roster, &result.side_a);
    let b = name_of(roster, &result.side_b);
    let (a, b) = if result.side_a_won() {
        (a.bold().to_string(), b.dimmed().to_string())
    } else {
        (a.dimmed().to_string(), b.bold().to_string())
    };
    format!(
        "{} {} {}  [{}, series p={:.3}]",
        a,
        result.score,
        b,
        result.format.label(),
        result.theoretical_series_probability
    )
}

fn standing_codes(standings: &[SwissStanding]) -> String {
    standings
        .iter()
        .map(|s| format!("{} ({})", s.code, s.record))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn print_run(result: &BracketRunResult, roster: &Roster) {
    println!("{}", "Strengths".cyan().bold());
    for entry in result.strengths.ranked() {
        println!(
            "  {:<5} odds {:>7.2}  p {:>6.3}  s {:>7.3}",
            entry.code, entry.sampled_odds, entry.normalized_probability, entry.strength
        );
    }

    println!("\n{}", "Play-in".cyan().bold());
    println!("  {}", match_line(&result.play_in.result, roster));
    for placement in &result.play_in.placements {
        println!("  → {} to pool {}", placement.code, placement.pool.as_number());
    }

    println!("\n{}", "Swiss stage".cyan().bold());
    for round in &result.swiss.rounds {
        println!("  Round {}", round.number);
        for m in &round.matches {
            let flag = if m.same_region { " (same region)".yellow().to_string() } else { String::new() };
            println!("    {} {}{}", m.record_a, match_line(&m.result, roster), flag);
        }
    }
    println!("  Qualified:  {}", standing_codes(&result.swiss.qualified).green());
    println!("  Eliminated: {}", standing_codes(&result.swiss.eliminated).red());

    println!("\n{}", "Playoffs".cyan().bold());
    for (label, matches) in [
        ("Quarterfinals", &result.playoffs.quarterfinals),
        ("Semifinals", &result.playoffs.semifinals),
    ] {
        println!("  {}", label);
        for m in matches.iter() {
            println!("    {}", match_line(m, roster));
        }
    }
    println!("  Final");
    println!("    {}", match_line(&result.playoffs.final_match, roster));

    println!(
        "\n{} {}",
        "Champion:".yellow().bold(),
        name_of(roster, result.champion()).yellow().bold()
    );

    for diagnostic in &result.diagnostics {
        println!("{} {:?}", "warning:".yellow(), diagnostic);
    }
}

pub fn print_summary(summary: &MonteCarloSummary, roster: &Roster) {
    println!(
        "{} ({} runs from seed {})",
        "Monte Carlo".cyan().bold(),
        summary.runs,
        summary.base_seed
    );
    println!(
        "  {:<22} {:>8} {:>8} {:>8} {:>8}",
        "Team", "Title", "Final", "Semi", "Swiss"
    );
    for tally in &summary.tallies {
        println!(
            "  {:<22} {:>7.1}% {:>7.1}% {:>7.1}% {:>7.1}%",
            name_of(roster, &tally.code),
            summary.rate(tally.titles) * 100.0,
            summary.rate(tally.finals) * 100.0,
            summary.rate(tally.semifinals) * 100.0,
            summary.rate(tally.swiss_qualifications) * 100.0
        );
    }
    if summary.region_clash_runs > 0 {
        println!(
            "{} {} run(s) kept a same-region opening pairing",
            "warning:".yellow(),
            summary.region_clash_runs
        );
    }
}

pub fn print_roster(roster: &Roster, play_in: &PlayInRouting) {
    println!("{}", "Roster".cyan().bold());
    for c in roster.iter() {
        println!(
            "  {:<5} {:<22} {:<4} pool {}  odds {:>6.2}-{:<6.2}",
            c.code,
            c.name,
            c.region,
            c.pool.as_number(),
            c.odds.min,
            c.odds.max
        );
    }
    println!(
        "\nPlay-in: {} vs {} (BO5)",
        name_of(roster, &play_in.side_a),
        name_of(roster, &play_in.side_b)
    );
}
