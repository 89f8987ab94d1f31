//! Defender loadout - equipped armor and its condition

use crate::item::ArmorProfile;
use crate::types::ProtectionSource;
use serde::{Deserialize, Serialize};

/// A piece of armor and how worn it is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquippedArmor {
    pub armor: ArmorProfile,
    /// Remaining durability, 0-100
    #[serde(default = "full_durability")]
    pub durability_percent: f64,
}

fn full_durability() -> f64 {
    100.0
}

/// What the defender is wearing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefenderLoadout {
    #[serde(default)]
    pub body_armor: Option<EquippedArmor>,
    #[serde(default)]
    pub helmet: Option<EquippedArmor>,
    /// A face shield is attached to the helmet
    #[serde(default)]
    pub face_shield: bool,
}

impl DefenderLoadout {
    /// No armor at all
    pub fn unarmored() -> Self {
        Self::default()
    }

    pub fn with_body_armor(mut self, armor: ArmorProfile, durability_percent: f64) -> Self {
        self.body_armor = Some(EquippedArmor {
            armor,
            durability_percent,
        });
        self
    }

    pub fn with_helmet(mut self, armor: ArmorProfile, durability_percent: f64) -> Self {
        self.helmet = Some(EquippedArmor {
            armor,
            durability_percent,
        });
        self
    }

    pub fn with_face_shield(mut self) -> Self {
        self.face_shield = true;
        self
    }

    /// Equipment filling a protection slot
    pub fn equipped(&self, source: ProtectionSource) -> Option<&EquippedArmor> {
        match source {
            ProtectionSource::Armor => self.body_armor.as_ref(),
            ProtectionSource::Helmet => self.helmet.as_ref(),
            ProtectionSource::None => None,
        }
    }
}

/// Armor resolved for one zone
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneProtection {
    pub source: ProtectionSource,
    /// Zone-specialized copy: class, blunt scalar and starting durability set
    pub armor: ArmorProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loadout_builder() {
        let loadout = DefenderLoadout::unarmored()
            .with_body_armor(ArmorProfile::new("vest", "Vest", 3.0, 40.0), 80.0)
            .with_face_shield();
        assert!(loadout.equipped(ProtectionSource::Armor).is_some());
        assert!(loadout.equipped(ProtectionSource::Helmet).is_none());
        assert!(loadout.equipped(ProtectionSource::None).is_none());
        assert!(loadout.face_shield);
    }

    #[test]
    fn test_loadout_json_defaults() {
        let json = r#"{"helmet": {"armor": {"id": "h", "name": "H", "armor_class": 4, "max_durability": 30}}}"#;
        let loadout: DefenderLoadout = serde_json::from_str(json).unwrap();
        let helmet = loadout.helmet.unwrap();
        assert!((helmet.durability_percent - 100.0).abs() < f64::EPSILON);
        assert!(loadout.body_armor.is_none());
        assert!(!loadout.face_shield);
    }
}
