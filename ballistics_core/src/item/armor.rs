//! ArmorProfile - protective gear stats and calibration curves

use crate::curve::CurvePoint;
use crate::types::ZoneId;
use serde::{Deserialize, Serialize};

/// Per-zone override on a piece of armor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtectiveData {
    pub zone: ZoneId,
    pub armor_class: f64,
    pub blunt_damage_scalar: f64,
    /// Coverage angle in degrees, informational
    #[serde(default)]
    pub protection_angle: f64,
}

/// Armor stats (body armor, helmets)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmorProfile {
    pub id: String,
    pub name: String,
    pub armor_class: f64,
    pub max_durability: f64,
    /// Durability at the start of a run; `None` means pristine
    #[serde(default)]
    pub current_durability: Option<f64>,
    #[serde(default = "default_scalar")]
    pub durability_damage_scalar: f64,
    #[serde(default = "default_scalar")]
    pub blunt_damage_scalar: f64,
    #[serde(default)]
    pub protective_data: Vec<ProtectiveData>,
    /// Penetration chance over `effective class - effective penetration`
    #[serde(default)]
    pub penetration_chance_curve: Vec<CurvePoint>,
    /// Body damage scalar for penetrating shots over the same differential
    #[serde(default)]
    pub penetration_damage_scalar_curve: Vec<CurvePoint>,
    /// Armor effectiveness over lost durability fraction (`1 - durability%`)
    #[serde(default)]
    pub anti_penetration_durability_scalar_curve: Vec<CurvePoint>,
}

fn default_scalar() -> f64 {
    1.0
}

impl ArmorProfile {
    /// Create pristine armor without overrides or curves
    pub fn new(id: &str, name: &str, armor_class: f64, max_durability: f64) -> Self {
        ArmorProfile {
            id: id.to_string(),
            name: name.to_string(),
            armor_class,
            max_durability,
            current_durability: None,
            durability_damage_scalar: 1.0,
            blunt_damage_scalar: 1.0,
            protective_data: Vec::new(),
            penetration_chance_curve: Vec::new(),
            penetration_damage_scalar_curve: Vec::new(),
            anti_penetration_durability_scalar_curve: Vec::new(),
        }
    }

    /// Durability at the start of a run, clamped to `[0, max_durability]`
    pub fn durability(&self) -> f64 {
        let max = self.max_durability.max(0.0);
        self.current_durability.unwrap_or(max).clamp(0.0, max)
    }

    /// Fraction of durability remaining, 0 when the armor has no durability pool
    pub fn durability_fraction(&self, current: f64) -> f64 {
        if self.max_durability <= 0.0 {
            return 0.0;
        }
        (current / self.max_durability).clamp(0.0, 1.0)
    }

    /// Copy with durability set from a 0-100 percentage
    pub fn with_durability_percent(&self, percent: f64) -> Self {
        let mut armor = self.clone();
        armor.current_durability = Some((percent.clamp(0.0, 100.0) / 100.0) * self.max_durability.max(0.0));
        armor
    }

    /// Explicit override for a zone, if the armor defines one
    pub fn override_for(&self, zone: ZoneId) -> Option<&ProtectiveData> {
        self.protective_data.iter().find(|p| p.zone == zone)
    }

    /// Copy specialized to a zone: override class and blunt scalar applied
    pub fn for_zone(&self, zone: ZoneId) -> Self {
        let mut armor = self.clone();
        if let Some(data) = self.override_for(zone) {
            armor.armor_class = data.armor_class;
            armor.blunt_damage_scalar = data.blunt_damage_scalar;
        }
        armor
    }
}
