//! Prelude module for convenient imports
//!
//! ```rust
//! use ballistics_core::prelude::*;
//! ```

// Records
pub use crate::item::{AmmoProfile, ArmorProfile, Item, ProtectiveData, WeaponProfile};
pub use crate::curve::{CurvePoint, Interpolation};
pub use crate::types::{BodyPartId, ProtectionSource, ZoneId};

// Zones
pub use crate::zones::{DefenderLoadout, EquippedArmor};

// Shots and simulation
pub use crate::ballistics::{calculate_shot, PenetrationRoll, ShotResult};
pub use crate::combat::{simulate, CombatSimulationResult};

// Analysis
pub use crate::analysis::{
    calculate_attacker_zones, estimate, summarize, Attacker, ShotDistribution, ZoneCalculation,
    ZoneSort,
};

// Config
pub use crate::config::{default_constants, BallisticsConstants};
