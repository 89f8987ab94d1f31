//! Combat simulation - repeated shots against one zone

mod result;
mod simulation;

pub use result::{CombatSimulationResult, ShotLogEntry};
pub use simulation::{simulate, simulate_with_rng};
