use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Worlds tournament simulator")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Simulate one tournament and print the result tree
    Simulate {
        /// Seed for the random stream (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,
        /// Print the result as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Repeat the tournament and tally how far each team got
    #[command(name = "monte-carlo")]
    MonteCarlo {
        /// Number of runs
        #[arg(short, long, default_value_t = 1000)]
        runs: usize,
        /// Base seed; run i uses seed + i (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Show the configured teams, pools and play-in
    Roster,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simulate() {
        let cli = Cli::try_parse_from(["worlds", "simulate", "--seed", "7", "--json"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Simulate {
                seed: Some(7),
                json: true
            }
        );
    }

    #[test]
    fn test_parse_monte_carlo_defaults() {
        let cli = Cli::try_parse_from(["worlds", "monte-carlo"]).unwrap();
        assert_eq!(
            cli.command,
            Command::MonteCarlo {
                runs: 1000,
                seed: None
            }
        );
    }

    #[test]
    fn test_parse_roster() {
        let cli = Cli::try_parse_from(["worlds", "roster"]).unwrap();
        assert_eq!(cli.command, Command::Roster);
    }
}
