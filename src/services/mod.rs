pub mod monte_carlo;
pub mod report;
pub mod simulation;
