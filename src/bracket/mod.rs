pub mod playoff;
pub mod runner;

pub use playoff::{PlayoffResult, QUARTERFINAL_SLOTS, run_playoffs};
pub use runner::{BracketRunResult, Diagnostic, PlayInOutcome, run_simulation};
