pub mod engine;
pub mod pairing;
pub mod standings;
pub mod types;

pub use engine::SwissEngine;
pub use pairing::{draw_round_one, pair_by_record};
pub use standings::{HistoryEntry, Outcome, StandingStatus, StandingsTable, SwissStanding};
pub use types::{Pairing, RoundOneDraw, SwissMatch, SwissRound, SwissStageResult};
