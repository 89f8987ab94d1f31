//! Core identifiers and small enums shared across the crate

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body part identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPartId {
    Head,
    Thorax,
    Stomach,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl BodyPartId {
    /// Get all body parts
    pub fn all() -> &'static [BodyPartId] {
        &[
            BodyPartId::Head,
            BodyPartId::Thorax,
            BodyPartId::Stomach,
            BodyPartId::LeftArm,
            BodyPartId::RightArm,
            BodyPartId::LeftLeg,
            BodyPartId::RightLeg,
        ]
    }
}

/// Protection zone identifier
///
/// Zones are the unit of simulation: every zone belongs to exactly one body
/// part and may be covered by a helmet or body armor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneId {
    // Head
    HeadTop,
    HeadNape,
    HeadEars,
    HeadEyes,
    HeadJaws,
    HeadFace,
    // Thorax
    ThoraxFront,
    ThoraxBack,
    ThoraxLeftSide,
    ThoraxRightSide,
    // Stomach
    StomachFront,
    StomachBack,
    StomachSides,
    Groin,
    // Limbs
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl ZoneId {
    /// Get all zones in registry order
    pub fn all() -> &'static [ZoneId] {
        &[
            ZoneId::HeadTop,
            ZoneId::HeadNape,
            ZoneId::HeadEars,
            ZoneId::HeadEyes,
            ZoneId::HeadJaws,
            ZoneId::HeadFace,
            ZoneId::ThoraxFront,
            ZoneId::ThoraxBack,
            ZoneId::ThoraxLeftSide,
            ZoneId::ThoraxRightSide,
            ZoneId::StomachFront,
            ZoneId::StomachBack,
            ZoneId::StomachSides,
            ZoneId::Groin,
            ZoneId::LeftArm,
            ZoneId::RightArm,
            ZoneId::LeftLeg,
            ZoneId::RightLeg,
        ]
    }

    /// Zones covered by a face shield (eyes and chin)
    pub fn is_face_shield_zone(self) -> bool {
        matches!(self, ZoneId::HeadEyes | ZoneId::HeadJaws)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Which piece of equipment covers a zone by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtectionSource {
    Helmet,
    Armor,
    None,
}

/// Which stat a range lookup is resolving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FalloffKind {
    Damage,
    Penetration,
}
