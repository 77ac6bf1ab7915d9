use thiserror::Error;

use crate::domain::SeedPool;

pub type Result<T> = std::result::Result<T, SimulationError>;

/// Every way a simulation run can be rejected or aborted.
///
/// Configuration variants are raised while building a `TournamentConfig`, before
/// any random number is drawn. The remaining variants indicate an internal
/// consistency fault during a run and abort it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error("roster is empty")]
    EmptyRoster,

    #[error("competitor {0} is listed more than once")]
    DuplicateCompetitor(String),

    #[error("competitor {code} has invalid odds range [{min}, {max}]")]
    InvalidOdds { code: String, min: f64, max: f64 },

    #[error("unknown competitor {code} referenced by {context}")]
    UnknownCompetitor { code: String, context: String },

    #[error("invalid play-in configuration: {0}")]
    InvalidPlayIn(String),

    #[error("swiss field has {actual} competitors, expected {expected}")]
    FieldSize { expected: usize, actual: usize },

    #[error("pool {pool:?} has {actual} competitors, expected {expected}")]
    PoolImbalance {
        pool: SeedPool,
        expected: usize,
        actual: usize,
    },

    #[error("pool {pool:?} has odd size {size}")]
    OddPool { pool: SeedPool, size: usize },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("round {round} pairing references {code}, which has no standing")]
    UnpairedCompetitor { round: u8, code: String },

    #[error("round {round}: record group {record} has odd size {size}")]
    OddRecordGroup {
        round: u8,
        record: String,
        size: usize,
    },

    #[error("swiss stage produced {actual} qualifiers, expected {expected}")]
    QualifierCount { expected: usize, actual: usize },
}

/// Context line for a failed simulation run
pub fn run_context(seed: u64) -> String {
    format!("Simulation failed for seed: {}", seed)
}

/// Context line for a failed configuration load
pub fn config_context(what: &str) -> String {
    format!("Failed to build {}", what)
}
