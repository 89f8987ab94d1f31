//! Analysis - per-zone kill metrics, summaries and shot distributions

mod distribution;
mod summary;
mod unbounded;
mod zones;

pub use distribution::{estimate, estimate_with_horizon, ShotDistribution, ShotProbability};
pub use summary::{summarize, ZoneSummary};
pub use zones::{
    calculate_attacker_zones, calculate_matchups, sort_zones, Attacker, AttackerZones,
    ZoneCalculation, ZoneSort,
};
