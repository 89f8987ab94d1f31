//! Shot loop - fire until the target dies or the safety cap is reached

use super::result::{CombatSimulationResult, ShotLogEntry};
use crate::ballistics::{calculate_shot, PenetrationRoll};
use crate::config::BallisticsConstants;
use crate::item::{AmmoProfile, ArmorProfile};
use crate::zones;
use rand::Rng;
use tracing::{debug, trace};

/// Simulate deterministic shots against one zone
///
/// The HP pool is `body_part_hp` for vital zones and the whole-body HP for
/// non-vital ones. Armor starts at its `durability()` and wears down by each
/// shot's armor damage, never below zero. At least one shot is always fired
/// and at most `constants.simulation.max_shots`.
pub fn simulate(
    ammo: &AmmoProfile,
    armor: Option<&ArmorProfile>,
    body_part_hp: f64,
    is_vital: bool,
    range: f64,
    constants: &BallisticsConstants,
) -> CombatSimulationResult {
    run(ammo, armor, body_part_hp, is_vital, range, constants, || {
        PenetrationRoll::Deterministic
    })
}

/// Simulate with one random penetration draw per shot
pub fn simulate_with_rng(
    ammo: &AmmoProfile,
    armor: Option<&ArmorProfile>,
    body_part_hp: f64,
    is_vital: bool,
    range: f64,
    constants: &BallisticsConstants,
    rng: &mut impl Rng,
) -> CombatSimulationResult {
    run(ammo, armor, body_part_hp, is_vital, range, constants, || {
        PenetrationRoll::draw(&mut *rng)
    })
}

fn run(
    ammo: &AmmoProfile,
    armor: Option<&ArmorProfile>,
    body_part_hp: f64,
    is_vital: bool,
    range: f64,
    constants: &BallisticsConstants,
    mut next_roll: impl FnMut() -> PenetrationRoll,
) -> CombatSimulationResult {
    let starting_hp = if is_vital { body_part_hp } else { zones::total_hp() };
    let max_shots = constants.simulation.max_shots.max(1);

    let mut hp = starting_hp;
    let mut durability = armor.map(ArmorProfile::durability).unwrap_or(0.0);
    let mut result = CombatSimulationResult::new(starting_hp, durability);

    loop {
        let shot = calculate_shot(ammo, armor, durability, range, next_roll(), constants);

        hp -= shot.damage_to_body_part;
        durability = (durability - durability.min(shot.damage_to_armor)).max(0.0);
        result.total_damage_dealt += shot.damage_to_body_part;

        let shot_number = result.shots.len() as u32 + 1;
        trace!(
            shot_number,
            penetrating = shot.is_penetrating,
            chance = shot.penetration_chance,
            hp,
            durability,
            "shot resolved"
        );

        result.shots.push(ShotLogEntry {
            shot_number,
            is_penetrating: shot.is_penetrating,
            penetration_chance: shot.penetration_chance,
            damage_to_body_part: shot.damage_to_body_part,
            damage_to_armor: shot.damage_to_armor,
            armor_durability_after: durability,
            hp_after: hp,
        });

        if hp <= 0.0 || shot_number >= max_shots {
            break;
        }
    }

    result.shots_to_kill = result.shots.len() as u32;
    result.final_armor_durability = durability;
    result.remaining_hp = hp;
    result.killed = hp <= 0.0;

    debug!(
        ammo = %ammo.id,
        armor = armor.map(|a| a.id.as_str()).unwrap_or("none"),
        shots = result.shots_to_kill,
        killed = result.killed,
        "simulation finished"
    );

    result
}
