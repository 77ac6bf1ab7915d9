pub mod roster;
pub mod settings;

pub use roster::{get_competitors, get_play_in_routing};
pub use settings::{AppConfig, OutcomeSettings, SwissSettings};
