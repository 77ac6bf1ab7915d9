pub mod bradley_terry;
pub mod strength;
pub mod types;

pub use bradley_terry::OutcomeModel;
pub use strength::derive_strengths;
pub use types::{CompetitorStrength, StrengthSnapshot, StrengthValue};
