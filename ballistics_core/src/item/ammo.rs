//! AmmoProfile - projectile stats and range tables

use crate::config::BallisticsConstants;
use crate::curve::CurvePoint;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Discrete per-distance values sampled from the game, keyed `"<meters>m"`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RangeTable(pub BTreeMap<String, f64>);

impl RangeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tabulated value at a whole-meter distance
    pub fn at(&self, meters: u32) -> Option<f64> {
        self.0.get(&format!("{meters}m")).copied()
    }

    /// Builder-style insert
    pub fn with(mut self, meters: u32, value: f64) -> Self {
        self.0.insert(format!("{meters}m"), value);
        self
    }
}

/// Ammunition stats
///
/// The three damage scales are optional because catalog data is often
/// incomplete; the `*_or_default` accessors substitute the configured
/// fallbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmmoProfile {
    pub id: String,
    pub name: String,
    pub caliber: String,
    /// Price per round
    #[serde(default)]
    pub price: f64,
    pub damage: f64,
    pub penetration: f64,
    #[serde(default)]
    pub blunt_damage_scale: Option<f64>,
    #[serde(default)]
    pub protection_gear_penetrated_damage_scale: Option<f64>,
    #[serde(default)]
    pub protection_gear_blunt_damage_scale: Option<f64>,
    #[serde(default)]
    pub damage_at_range: Option<RangeTable>,
    #[serde(default)]
    pub penetration_at_range: Option<RangeTable>,
    /// Damage multiplier over distance (curve units: centimeters)
    #[serde(default)]
    pub damage_over_distance: Vec<CurvePoint>,
    /// Penetration multiplier over distance (curve units: centimeters)
    #[serde(default)]
    pub penetration_power_over_distance: Vec<CurvePoint>,
}

impl AmmoProfile {
    /// Create ammo with base stats only
    pub fn new(id: &str, name: &str, caliber: &str, damage: f64, penetration: f64) -> Self {
        AmmoProfile {
            id: id.to_string(),
            name: name.to_string(),
            caliber: caliber.to_string(),
            price: 0.0,
            damage,
            penetration,
            blunt_damage_scale: None,
            protection_gear_penetrated_damage_scale: None,
            protection_gear_blunt_damage_scale: None,
            damage_at_range: None,
            penetration_at_range: None,
            damage_over_distance: Vec::new(),
            penetration_power_over_distance: Vec::new(),
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn blunt_damage_scale_or_default(&self, constants: &BallisticsConstants) -> f64 {
        self.blunt_damage_scale
            .unwrap_or(constants.shot.default_blunt_damage_scale)
    }

    pub fn penetrated_gear_scale_or_default(&self, constants: &BallisticsConstants) -> f64 {
        self.protection_gear_penetrated_damage_scale
            .unwrap_or(constants.shot.default_penetrated_gear_damage_scale)
    }

    pub fn blunt_gear_scale_or_default(&self, constants: &BallisticsConstants) -> f64 {
        self.protection_gear_blunt_damage_scale
            .unwrap_or(constants.shot.default_blunt_gear_damage_scale)
    }
}
