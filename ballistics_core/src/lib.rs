//! ballistics_core - Ballistic damage simulation for weapon-vs-armor matchups
//!
//! This library provides:
//! - Curves: piecewise linear / cubic Hermite evaluation
//! - Zones: static body part and protection zone registry
//! - Ballistics: range falloff and single-shot armor interaction
//! - Combat: multi-shot simulation with armor wear and a safety cap
//! - Analysis: per-zone time/shots/cost to kill, summaries and
//!   shot-to-kill probability distributions
//!
//! Everything is pure computation over plain records: no I/O outside the
//! explicit config loaders and no state shared between calls.

pub mod analysis;
pub mod ballistics;
pub mod combat;
pub mod config;
pub mod curve;
pub mod item;
pub mod prelude;
pub mod types;
pub mod zones;

// Re-export core types for convenience
pub use analysis::{
    calculate_attacker_zones, calculate_matchups, estimate, sort_zones, summarize, Attacker,
    AttackerZones, ShotDistribution, ZoneCalculation, ZoneSort, ZoneSummary,
};
pub use ballistics::{calculate_shot, PenetrationRoll, ShotResult};
pub use combat::{simulate, simulate_with_rng, CombatSimulationResult, ShotLogEntry};
pub use config::{default_constants, BallisticsConstants, Catalog, ConfigError};
pub use curve::{evaluate, CurvePoint, Interpolation};
pub use item::{AmmoProfile, ArmorProfile, Item, ProtectiveData, RangeTable, WeaponProfile};
pub use types::{BodyPartId, FalloffKind, ProtectionSource, ZoneId};
pub use zones::{ArmorZone, BodyPart, DefenderLoadout, EquippedArmor};
