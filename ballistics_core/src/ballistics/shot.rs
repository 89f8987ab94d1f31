//! Single shot resolution against (optional) armor

use super::falloff::{resolve_damage, resolve_penetration};
use crate::config::BallisticsConstants;
use crate::curve::evaluate;
use crate::item::{AmmoProfile, ArmorProfile};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How a shot decides whether it penetrates
///
/// All modes share one code path in `calculate_shot`; only the final
/// decision differs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PenetrationRoll {
    /// Penetrate when the chance is above the configured threshold (0.5)
    Deterministic,
    /// Force the outcome
    Override(bool),
    /// Compare a uniform sample in `[0, 1)` to the chance
    Draw(f64),
}

impl PenetrationRoll {
    /// Take one uniform sample from `rng`
    pub fn draw(rng: &mut impl Rng) -> Self {
        PenetrationRoll::Draw(rng.gen::<f64>())
    }

    fn decide(self, chance: f64, threshold: f64) -> bool {
        match self {
            PenetrationRoll::Override(penetrates) => penetrates,
            PenetrationRoll::Draw(sample) => sample < chance,
            PenetrationRoll::Deterministic => chance > threshold,
        }
    }
}

/// Outcome of one shot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotResult {
    pub is_penetrating: bool,
    pub damage_to_body_part: f64,
    pub damage_to_armor: f64,
    /// Always in `[0, 1]`
    pub penetration_chance: f64,
}

impl ShotResult {
    /// A hit on an unprotected zone
    pub fn unarmored(damage: f64) -> Self {
        ShotResult {
            is_penetrating: true,
            damage_to_body_part: damage,
            damage_to_armor: 0.0,
            penetration_chance: 1.0,
        }
    }
}

/// Armor effectiveness at a given durability
///
/// Looks up the anti-penetration curve at the lost durability fraction;
/// without a curve effectiveness is the remaining fraction itself.
pub fn armor_effectiveness(armor: &ArmorProfile, current_durability: f64) -> f64 {
    let remaining = armor.durability_fraction(current_durability);
    if armor.anti_penetration_durability_scalar_curve.is_empty() {
        remaining
    } else {
        evaluate(&armor.anti_penetration_durability_scalar_curve, 1.0 - remaining)
    }
}

/// Resolve one shot
///
/// Reads `current_durability` but never mutates anything; the caller owns
/// durability bookkeeping.
pub fn calculate_shot(
    ammo: &AmmoProfile,
    armor: Option<&ArmorProfile>,
    current_durability: f64,
    range: f64,
    roll: PenetrationRoll,
    constants: &BallisticsConstants,
) -> ShotResult {
    let damage = resolve_damage(ammo, range, constants);

    let Some(armor) = armor else {
        return ShotResult::unarmored(damage);
    };

    let penetration = resolve_penetration(ammo, range, constants);
    let effective_class = armor.armor_class * armor_effectiveness(armor, current_durability);
    let differential = effective_class - penetration;

    let chance_curve = curve_or_default(&armor.penetration_chance_curve, &constants.curves.penetration_chance);
    let penetration_chance = evaluate(chance_curve, differential).clamp(0.0, 1.0);

    let is_penetrating = roll.decide(penetration_chance, constants.shot.penetration_threshold);
    let armor_wear = damage * armor.durability_damage_scalar * constants.shot.armor_damage_calibration;

    let (damage_to_body_part, damage_to_armor) = if is_penetrating {
        let scalar_curve = curve_or_default(
            &armor.penetration_damage_scalar_curve,
            &constants.curves.penetration_damage_scalar,
        );
        let scalar = evaluate(scalar_curve, differential.max(0.0));
        (
            damage * scalar,
            armor_wear * ammo.penetrated_gear_scale_or_default(constants),
        )
    } else {
        (
            damage * ammo.blunt_damage_scale_or_default(constants) * armor.blunt_damage_scalar,
            armor_wear * ammo.blunt_gear_scale_or_default(constants),
        )
    };

    ShotResult {
        is_penetrating,
        damage_to_body_part: damage_to_body_part.max(0.0),
        damage_to_armor: damage_to_armor.max(0.0),
        penetration_chance,
    }
}

/// Resolve one shot with a single random draw
pub fn calculate_shot_with_rng(
    ammo: &AmmoProfile,
    armor: Option<&ArmorProfile>,
    current_durability: f64,
    range: f64,
    constants: &BallisticsConstants,
    rng: &mut impl Rng,
) -> ShotResult {
    calculate_shot(ammo, armor, current_durability, range, PenetrationRoll::draw(rng), constants)
}

fn curve_or_default<'a, T>(curve: &'a [T], fallback: &'a [T]) -> &'a [T] {
    if curve.is_empty() {
        fallback
    } else {
        curve
    }
}
