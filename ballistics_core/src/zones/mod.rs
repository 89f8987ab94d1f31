//! Zone registry - body parts, protection zones and armor coverage
//!
//! The registry is immutable static data. Zone and body part tables are
//! laid out in enum order so lookups are plain indexing.

mod loadout;
mod registry;

pub use loadout::{DefenderLoadout, EquippedArmor, ZoneProtection};
pub use registry::{
    armor_class_for_zone, body_part, body_part_by_id, body_parts, is_protected_by, total_hp, zone,
    zone_protection, zones, zones_for_body_part,
};

use crate::types::{BodyPartId, ProtectionSource, ZoneId};
use serde::Serialize;

/// A body part with its own HP pool
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyPart {
    pub id: BodyPartId,
    pub name: &'static str,
    pub hp: f64,
    /// Destroying a vital part kills outright
    pub is_vital: bool,
    pub zones: &'static [ZoneId],
}

/// Normalized body-diagram rectangle (0..1 on both axes)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A protection zone
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArmorZone {
    pub id: ZoneId,
    pub name: &'static str,
    pub body_part: BodyPartId,
    pub damage_modifier: f64,
    /// Multiplier on damage once the owning part is destroyed
    pub destroyed_modifier: f64,
    pub default_protection: ProtectionSource,
    pub geometry: ZoneGeometry,
}
