//! Shot-to-kill distribution under stochastic penetration
//!
//! The deterministic simulator decides every shot with the >50% rule, which
//! hides variance. Here each shot penetrates with probability `p` (recomputed
//! per shot as the armor wears) and otherwise deals blunt damage. A DP over
//! cumulative damage tracks the probability mass still alive after each shot;
//! mass that reaches the target HP is recorded as a kill on that shot.
//!
//! Armor wear follows the expected path: after each shot durability drops by
//! `p * penetrating_wear + (1 - p) * blunt_wear`, shared by every branch.

use crate::ballistics::{calculate_shot, PenetrationRoll};
use crate::config::BallisticsConstants;
use crate::item::{AmmoProfile, ArmorProfile};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Probability of killing on exactly `shots` hits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotProbability {
    pub shots: u32,
    pub probability: f64,
}

/// Distribution over shots-to-kill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotDistribution {
    /// Probability-weighted mean; infinite when no kill is possible in the horizon
    #[serde(with = "super::unbounded")]
    pub expected_stk: f64,
    /// Smallest shot count above the significance threshold
    pub min_stk: u32,
    /// Largest shot count above the significance threshold
    pub max_stk: u32,
    /// Normalized to sum to 1
    pub distribution: Vec<ShotProbability>,
    pub average_penetration_chance: f64,
}

impl ShotDistribution {
    fn single_point(shots: u32, penetration_chance: f64) -> Self {
        ShotDistribution {
            expected_stk: f64::from(shots),
            min_stk: shots,
            max_stk: shots,
            distribution: vec![ShotProbability {
                shots,
                probability: 1.0,
            }],
            average_penetration_chance: penetration_chance,
        }
    }

    fn never_kills(max_shots: u32, average_penetration_chance: f64) -> Self {
        ShotDistribution {
            expected_stk: f64::INFINITY,
            min_stk: max_shots,
            max_stk: max_shots,
            distribution: Vec::new(),
            average_penetration_chance,
        }
    }

    /// Probability of a kill within `shots` hits
    pub fn cumulative(&self, shots: u32) -> f64 {
        self.distribution
            .iter()
            .filter(|p| p.shots <= shots)
            .map(|p| p.probability)
            .sum()
    }
}

/// Estimate the distribution with the configured horizon (30 shots by default)
pub fn estimate(
    ammo: &AmmoProfile,
    armor: Option<&ArmorProfile>,
    target_hp: f64,
    range: f64,
    constants: &BallisticsConstants,
) -> ShotDistribution {
    estimate_with_horizon(ammo, armor, target_hp, range, constants.distribution.max_shots, constants)
}

/// Estimate the distribution over at most `max_shots` shots
pub fn estimate_with_horizon(
    ammo: &AmmoProfile,
    armor: Option<&ArmorProfile>,
    target_hp: f64,
    range: f64,
    max_shots: u32,
    constants: &BallisticsConstants,
) -> ShotDistribution {
    let max_shots = max_shots.max(1);
    let mut durability = armor.map(ArmorProfile::durability).unwrap_or(0.0);

    let first = calculate_shot(ammo, armor, durability, range, PenetrationRoll::Override(true), constants);
    if !target_hp.is_finite() {
        warn!(ammo = %ammo.id, target_hp, "target HP is not finite");
        return ShotDistribution::never_kills(max_shots, first.penetration_chance);
    }
    if armor.is_none() || first.penetration_chance >= constants.distribution.degenerate_chance {
        return match shots_for(target_hp, first.damage_to_body_part) {
            Some(shots) => ShotDistribution::single_point(shots, first.penetration_chance),
            None => ShotDistribution::never_kills(max_shots, first.penetration_chance),
        };
    }

    // Keep the bin count bounded for oversized targets
    let max_bins = constants.distribution.max_bins.max(1) as f64;
    let resolution = constants
        .distribution
        .damage_resolution
        .min(max_bins / target_hp.max(1.0));
    if resolution < constants.distribution.damage_resolution {
        debug!(target_hp, resolution, "coarsened damage bins");
    }
    let target_bins = ((target_hp * resolution).ceil().max(1.0)) as usize;
    let to_bins = |damage: f64| (damage * resolution).round().max(0.0) as usize;

    // alive[bin]: probability of having taken `bin / resolution` damage and still standing
    let mut alive = vec![0.0; target_bins];
    alive[0] = 1.0;
    let mut kills = Vec::with_capacity(max_shots as usize);
    let mut chance_sum = 0.0;

    for _ in 0..max_shots {
        let penetrating = calculate_shot(ammo, armor, durability, range, PenetrationRoll::Override(true), constants);
        let blunt = calculate_shot(ammo, armor, durability, range, PenetrationRoll::Override(false), constants);
        let p = penetrating.penetration_chance;
        chance_sum += p;

        let branches = [
            (p, to_bins(penetrating.damage_to_body_part)),
            (1.0 - p, to_bins(blunt.damage_to_body_part)),
        ];

        let mut next = vec![0.0; target_bins];
        let mut killed = 0.0;
        for (bin, &mass) in alive.iter().enumerate() {
            if mass == 0.0 {
                continue;
            }
            for &(weight, step) in &branches {
                if weight <= 0.0 {
                    continue;
                }
                let reached = bin + step;
                if reached >= target_bins {
                    killed += mass * weight;
                } else {
                    next[reached] += mass * weight;
                }
            }
        }
        kills.push(killed);
        alive = next;

        let wear = p * penetrating.damage_to_armor + (1.0 - p) * blunt.damage_to_armor;
        durability = (durability - durability.min(wear)).max(0.0);

        if alive.iter().sum::<f64>() <= f64::EPSILON {
            break;
        }
    }

    let average_penetration_chance = chance_sum / kills.len() as f64;
    let total: f64 = kills.iter().sum();
    if total <= 0.0 {
        debug!(ammo = %ammo.id, target_hp, "no kill within horizon");
        return ShotDistribution::never_kills(max_shots, average_penetration_chance);
    }

    let distribution: Vec<ShotProbability> = kills
        .iter()
        .enumerate()
        .filter(|(_, mass)| **mass > 0.0)
        .map(|(idx, &mass)| ShotProbability {
            shots: idx as u32 + 1,
            probability: mass / total,
        })
        .collect();

    let expected_stk: f64 = distribution
        .iter()
        .map(|p| f64::from(p.shots) * p.probability)
        .sum();

    let significant = |p: &&ShotProbability| p.probability >= constants.distribution.significance;
    let min_stk = distribution
        .iter()
        .find(significant)
        .map(|p| p.shots)
        .unwrap_or_else(|| expected_stk_floor(expected_stk));
    let max_stk = distribution
        .iter()
        .rev()
        .find(significant)
        .map(|p| p.shots)
        .unwrap_or(min_stk);

    debug!(
        ammo = %ammo.id,
        target_hp,
        expected_stk,
        min_stk,
        max_stk,
        "distribution estimated"
    );

    ShotDistribution {
        expected_stk,
        min_stk,
        max_stk,
        distribution,
        average_penetration_chance,
    }
}

/// `ceil(target_hp / damage)`, at least 1; `None` when damage never lands
fn shots_for(target_hp: f64, damage: f64) -> Option<u32> {
    if damage <= 0.0 || !damage.is_finite() {
        return None;
    }
    Some(((target_hp / damage).ceil() as u32).max(1))
}

fn expected_stk_floor(expected_stk: f64) -> u32 {
    (expected_stk.floor() as u32).max(1)
}
