pub mod probability;
pub mod simulator;
pub mod types;

pub use probability::{best_of_3, best_of_5, series_win_probability};
pub use simulator::MatchSimulator;
pub use types::{GameRecord, MatchResult, Score, SeriesFormat};
