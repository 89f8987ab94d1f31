//! Static zone and body part tables

use super::{ArmorZone, BodyPart, DefenderLoadout, ZoneGeometry, ZoneProtection};
use crate::types::{BodyPartId, ProtectionSource, ZoneId};

const HEAD_ZONES: &[ZoneId] = &[
    ZoneId::HeadTop,
    ZoneId::HeadNape,
    ZoneId::HeadEars,
    ZoneId::HeadEyes,
    ZoneId::HeadJaws,
    ZoneId::HeadFace,
];
const THORAX_ZONES: &[ZoneId] = &[
    ZoneId::ThoraxFront,
    ZoneId::ThoraxBack,
    ZoneId::ThoraxLeftSide,
    ZoneId::ThoraxRightSide,
];
const STOMACH_ZONES: &[ZoneId] = &[
    ZoneId::StomachFront,
    ZoneId::StomachBack,
    ZoneId::StomachSides,
    ZoneId::Groin,
];

// Same order as `BodyPartId`
static BODY_PARTS: [BodyPart; 7] = [
    BodyPart { id: BodyPartId::Head, name: "Head", hp: 35.0, is_vital: true, zones: HEAD_ZONES },
    BodyPart { id: BodyPartId::Thorax, name: "Thorax", hp: 85.0, is_vital: true, zones: THORAX_ZONES },
    BodyPart { id: BodyPartId::Stomach, name: "Stomach", hp: 70.0, is_vital: false, zones: STOMACH_ZONES },
    BodyPart { id: BodyPartId::LeftArm, name: "Left Arm", hp: 60.0, is_vital: false, zones: &[ZoneId::LeftArm] },
    BodyPart { id: BodyPartId::RightArm, name: "Right Arm", hp: 60.0, is_vital: false, zones: &[ZoneId::RightArm] },
    BodyPart { id: BodyPartId::LeftLeg, name: "Left Leg", hp: 65.0, is_vital: false, zones: &[ZoneId::LeftLeg] },
    BodyPart { id: BodyPartId::RightLeg, name: "Right Leg", hp: 65.0, is_vital: false, zones: &[ZoneId::RightLeg] },
];

const fn rect(x: f64, y: f64, width: f64, height: f64) -> ZoneGeometry {
    ZoneGeometry { x, y, width, height }
}

const fn armor_zone(
    id: ZoneId,
    name: &'static str,
    body_part: BodyPartId,
    destroyed_modifier: f64,
    default_protection: ProtectionSource,
    geometry: ZoneGeometry,
) -> ArmorZone {
    ArmorZone {
        id,
        name,
        body_part,
        damage_modifier: 1.0,
        destroyed_modifier,
        default_protection,
        geometry,
    }
}

// Same order as `ZoneId`
static ZONES: [ArmorZone; 18] = [
    armor_zone(ZoneId::HeadTop, "Top of Head", BodyPartId::Head, 1.0, ProtectionSource::Helmet, rect(0.44, 0.00, 0.12, 0.03)),
    armor_zone(ZoneId::HeadNape, "Nape", BodyPartId::Head, 1.0, ProtectionSource::Helmet, rect(0.44, 0.03, 0.12, 0.03)),
    armor_zone(ZoneId::HeadEars, "Ears", BodyPartId::Head, 1.0, ProtectionSource::Helmet, rect(0.42, 0.04, 0.16, 0.02)),
    armor_zone(ZoneId::HeadEyes, "Eyes", BodyPartId::Head, 1.0, ProtectionSource::Helmet, rect(0.45, 0.05, 0.10, 0.015)),
    armor_zone(ZoneId::HeadJaws, "Jaws", BodyPartId::Head, 1.0, ProtectionSource::Helmet, rect(0.45, 0.08, 0.10, 0.02)),
    armor_zone(ZoneId::HeadFace, "Face", BodyPartId::Head, 1.0, ProtectionSource::None, rect(0.45, 0.065, 0.10, 0.015)),
    armor_zone(ZoneId::ThoraxFront, "Thorax Front", BodyPartId::Thorax, 1.0, ProtectionSource::Armor, rect(0.38, 0.13, 0.24, 0.15)),
    armor_zone(ZoneId::ThoraxBack, "Thorax Back", BodyPartId::Thorax, 1.0, ProtectionSource::Armor, rect(0.38, 0.13, 0.24, 0.15)),
    armor_zone(ZoneId::ThoraxLeftSide, "Thorax Left Side", BodyPartId::Thorax, 1.0, ProtectionSource::Armor, rect(0.34, 0.14, 0.04, 0.13)),
    armor_zone(ZoneId::ThoraxRightSide, "Thorax Right Side", BodyPartId::Thorax, 1.0, ProtectionSource::Armor, rect(0.62, 0.14, 0.04, 0.13)),
    armor_zone(ZoneId::StomachFront, "Stomach Front", BodyPartId::Stomach, 1.5, ProtectionSource::Armor, rect(0.39, 0.28, 0.22, 0.11)),
    armor_zone(ZoneId::StomachBack, "Stomach Back", BodyPartId::Stomach, 1.5, ProtectionSource::Armor, rect(0.39, 0.28, 0.22, 0.11)),
    armor_zone(ZoneId::StomachSides, "Stomach Sides", BodyPartId::Stomach, 1.5, ProtectionSource::Armor, rect(0.35, 0.28, 0.30, 0.10)),
    armor_zone(ZoneId::Groin, "Groin", BodyPartId::Stomach, 1.5, ProtectionSource::Armor, rect(0.42, 0.39, 0.16, 0.05)),
    armor_zone(ZoneId::LeftArm, "Left Arm", BodyPartId::LeftArm, 0.7, ProtectionSource::None, rect(0.22, 0.13, 0.12, 0.32)),
    armor_zone(ZoneId::RightArm, "Right Arm", BodyPartId::RightArm, 0.7, ProtectionSource::None, rect(0.66, 0.13, 0.12, 0.32)),
    armor_zone(ZoneId::LeftLeg, "Left Leg", BodyPartId::LeftLeg, 1.0, ProtectionSource::None, rect(0.38, 0.44, 0.11, 0.54)),
    armor_zone(ZoneId::RightLeg, "Right Leg", BodyPartId::RightLeg, 1.0, ProtectionSource::None, rect(0.51, 0.44, 0.11, 0.54)),
];

/// All zones in registry order
pub fn zones() -> &'static [ArmorZone] {
    &ZONES
}

/// All body parts
pub fn body_parts() -> &'static [BodyPart] {
    &BODY_PARTS
}

pub fn zone(id: ZoneId) -> &'static ArmorZone {
    &ZONES[id as usize]
}

pub fn body_part_by_id(id: BodyPartId) -> &'static BodyPart {
    &BODY_PARTS[id as usize]
}

/// Body part owning a zone
pub fn body_part(zone_id: ZoneId) -> &'static BodyPart {
    body_part_by_id(zone(zone_id).body_part)
}

pub fn zones_for_body_part(body_part_id: BodyPartId) -> &'static [ZoneId] {
    body_part_by_id(body_part_id).zones
}

/// Whether a zone is covered by the given equipment kind by default
pub fn is_protected_by(zone_id: ZoneId, source: ProtectionSource) -> bool {
    source != ProtectionSource::None && zone(zone_id).default_protection == source
}

/// Sum of every body part's HP
pub fn total_hp() -> f64 {
    BODY_PARTS.iter().map(|part| part.hp).sum()
}

/// Effective armor class protecting a zone under a loadout
///
/// Per-zone override on the covering item wins, then its base class, else 0.
/// Eye and chin zones need either an explicit helmet override or an attached
/// face shield; the shield inherits the helmet's base class.
pub fn armor_class_for_zone(zone_id: ZoneId, loadout: &DefenderLoadout) -> f64 {
    match zone(zone_id).default_protection {
        ProtectionSource::Armor => loadout
            .body_armor
            .as_ref()
            .map(|equipped| {
                equipped
                    .armor
                    .override_for(zone_id)
                    .map(|data| data.armor_class)
                    .unwrap_or(equipped.armor.armor_class)
            })
            .unwrap_or(0.0),
        ProtectionSource::Helmet => {
            let Some(helmet) = loadout.helmet.as_ref() else {
                return 0.0;
            };
            if let Some(data) = helmet.armor.override_for(zone_id) {
                data.armor_class
            } else if !zone_id.is_face_shield_zone() || loadout.face_shield {
                helmet.armor.armor_class
            } else {
                0.0
            }
        }
        ProtectionSource::None => 0.0,
    }
}

/// Zone-specialized armor and durability for a zone, `None` when unprotected
pub fn zone_protection(zone_id: ZoneId, loadout: &DefenderLoadout) -> Option<ZoneProtection> {
    let source = zone(zone_id).default_protection;
    let equipped = match source {
        ProtectionSource::Armor => loadout.body_armor.as_ref()?,
        ProtectionSource::Helmet => loadout.helmet.as_ref()?,
        ProtectionSource::None => return None,
    };

    let armor_class = armor_class_for_zone(zone_id, loadout);
    if armor_class <= 0.0 {
        return None;
    }

    let mut armor = equipped
        .armor
        .for_zone(zone_id)
        .with_durability_percent(equipped.durability_percent);
    armor.armor_class = armor_class;

    Some(ZoneProtection { source, armor })
}
