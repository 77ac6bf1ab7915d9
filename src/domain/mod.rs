pub mod models;
pub mod play_in;
mod roster;
pub mod tournament;

pub use models::*;
pub use play_in::{Placement, PlayInRouting, PlayInSide};
pub use roster::Roster;
pub use tournament::{FieldEntry, TournamentConfig};
