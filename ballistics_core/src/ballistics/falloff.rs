//! Range falloff - damage and penetration over distance
//!
//! Resolution order for a range in meters:
//! 1. `range <= 0`: base value
//! 2. Exact supported bucket: the ammo's tabulated value, base value if missing
//! 3. Continuous curve (input in centimeters): base value times the curve
//! 4. No curve: linear falloff with a floor

use crate::config::BallisticsConstants;
use crate::curve::evaluate;
use crate::item::AmmoProfile;
use crate::types::FalloffKind;

/// Effective damage or penetration of `ammo` at `range` meters
pub fn resolve(kind: FalloffKind, ammo: &AmmoProfile, range: f64, constants: &BallisticsConstants) -> f64 {
    let (base, table, curve) = match kind {
        FalloffKind::Damage => (ammo.damage, ammo.damage_at_range.as_ref(), &ammo.damage_over_distance),
        FalloffKind::Penetration => (
            ammo.penetration,
            ammo.penetration_at_range.as_ref(),
            &ammo.penetration_power_over_distance,
        ),
    };

    if range.is_nan() || range <= 0.0 {
        return base;
    }

    if let Some(meters) = bucket(range, constants) {
        return table.and_then(|t| t.at(meters)).unwrap_or(base);
    }

    if !curve.is_empty() {
        return base * evaluate(curve, range * constants.falloff.curve_units_per_meter);
    }

    base * fallback_factor(kind, range, constants)
}

pub fn resolve_damage(ammo: &AmmoProfile, range: f64, constants: &BallisticsConstants) -> f64 {
    resolve(FalloffKind::Damage, ammo, range, constants)
}

pub fn resolve_penetration(ammo: &AmmoProfile, range: f64, constants: &BallisticsConstants) -> f64 {
    resolve(FalloffKind::Penetration, ammo, range, constants)
}

/// Multiplier used when the ammo has no curve data
///
/// Damage: `max(1 - range/1000 * 0.3, 0.5)`,
/// penetration: `max(1 - range/1500 * 0.25, 0.6)`.
pub fn fallback_factor(kind: FalloffKind, range: f64, constants: &BallisticsConstants) -> f64 {
    let f = &constants.falloff;
    let (span, drop, floor) = match kind {
        FalloffKind::Damage => (f.damage_range, f.damage_drop, f.damage_floor),
        FalloffKind::Penetration => (f.penetration_range, f.penetration_drop, f.penetration_floor),
    };
    (1.0 - (range.max(0.0) / span) * drop).max(floor)
}

/// Supported bucket matching `range` exactly
fn bucket(range: f64, constants: &BallisticsConstants) -> Option<u32> {
    if range.fract() != 0.0 || range > f64::from(u32::MAX) {
        return None;
    }
    let meters = range as u32;
    constants
        .falloff
        .range_buckets
        .contains(&meters)
        .then_some(meters)
}
