//! Zone aggregation - run the simulator over every zone for each attacker

use super::summary::{summarize, ZoneSummary};
use crate::combat::{simulate, CombatSimulationResult};
use crate::config::BallisticsConstants;
use crate::item::{AmmoProfile, WeaponProfile};
use crate::types::{BodyPartId, ProtectionSource, ZoneId};
use crate::zones::{self, DefenderLoadout};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Kill metrics for one zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneCalculation {
    pub zone_id: ZoneId,
    pub body_part_id: BodyPartId,
    /// Seconds; infinite when the safety cap was hit
    #[serde(with = "super::unbounded")]
    pub ttk: f64,
    pub shots_to_kill: u32,
    pub cost_to_kill: f64,
    pub is_protected: bool,
    /// Effective class after zone overrides, 0 when unprotected
    pub armor_class: f64,
    pub protection: ProtectionSource,
    pub simulation: CombatSimulationResult,
}

impl ZoneCalculation {
    /// Killable within the safety cap
    pub fn is_viable(&self) -> bool {
        self.ttk.is_finite()
    }
}

/// A weapon firing a specific round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attacker {
    pub weapon: WeaponProfile,
    pub ammo: AmmoProfile,
}

impl Attacker {
    pub fn new(weapon: WeaponProfile, ammo: AmmoProfile) -> Self {
        Attacker { weapon, ammo }
    }
}

/// Every zone result for one attacker plus the derived summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackerZones {
    pub weapon_id: String,
    pub ammo_id: String,
    pub zones: Vec<ZoneCalculation>,
    pub summary: ZoneSummary,
}

/// Ordering for zone tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneSort {
    /// Fastest kill first
    Ttk,
    /// Most shots first
    ShotsToKill,
    /// Cheapest kill first
    CostToKill,
}

/// Compute kill metrics for every registered zone, in registry order
pub fn calculate_attacker_zones(
    weapon: &WeaponProfile,
    ammo: &AmmoProfile,
    loadout: &DefenderLoadout,
    range: f64,
    constants: &BallisticsConstants,
) -> Vec<ZoneCalculation> {
    if !weapon.accepts(ammo) {
        warn!(
            weapon = %weapon.id,
            ammo = %ammo.id,
            "ammo caliber does not match weapon, computing anyway"
        );
    }

    zones::zones()
        .iter()
        .map(|zone| {
            let part = zones::body_part_by_id(zone.body_part);
            let protection = zones::zone_protection(zone.id, loadout);
            let armor = protection.as_ref().map(|p| &p.armor);

            let simulation = simulate(ammo, armor, part.hp, part.is_vital, range, constants);

            let ttk = if simulation.killed {
                weapon.time_for_shots(simulation.shots_to_kill)
            } else {
                f64::INFINITY
            };
            let cost_to_kill = f64::from(simulation.shots_to_kill) * ammo.price;

            debug!(
                zone = %zone.id,
                shots = simulation.shots_to_kill,
                ttk,
                "zone evaluated"
            );

            ZoneCalculation {
                zone_id: zone.id,
                body_part_id: zone.body_part,
                ttk,
                shots_to_kill: simulation.shots_to_kill,
                cost_to_kill,
                is_protected: protection.is_some(),
                armor_class: armor.map(|a| a.armor_class).unwrap_or(0.0),
                protection: protection
                    .as_ref()
                    .map(|p| p.source)
                    .unwrap_or(ProtectionSource::None),
                simulation,
            }
        })
        .collect()
}

/// Evaluate every attacker against the same defender
pub fn calculate_matchups(
    attackers: &[Attacker],
    loadout: &DefenderLoadout,
    range: f64,
    constants: &BallisticsConstants,
) -> Vec<AttackerZones> {
    attackers
        .iter()
        .map(|attacker| {
            let zones = calculate_attacker_zones(&attacker.weapon, &attacker.ammo, loadout, range, constants);
            let summary = summarize(&zones);
            AttackerZones {
                weapon_id: attacker.weapon.id.clone(),
                ammo_id: attacker.ammo.id.clone(),
                zones,
                summary,
            }
        })
        .collect()
}

/// Stable sort: equal keys keep their input order
pub fn sort_zones(zones: &mut [ZoneCalculation], sort: ZoneSort) {
    match sort {
        ZoneSort::Ttk => zones.sort_by(|a, b| a.ttk.total_cmp(&b.ttk)),
        ZoneSort::ShotsToKill => zones.sort_by(|a, b| b.shots_to_kill.cmp(&a.shots_to_kill)),
        ZoneSort::CostToKill => zones.sort_by(|a, b| a.cost_to_kill.total_cmp(&b.cost_to_kill)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::linear_curve;
    use crate::item::ArmorProfile;

    fn rifle() -> WeaponProfile {
        WeaponProfile::new("ak", "AK", "7.62x39", 600.0)
    }

    fn round() -> AmmoProfile {
        AmmoProfile::new("ps", "PS", "7.62x39", 50.0, 35.0).with_price(100.0)
    }

    fn plate() -> ArmorProfile {
        let mut armor = ArmorProfile::new("plate", "Plate", 60.0, 60.0);
        armor.durability_damage_scalar = 0.1;
        armor.penetration_chance_curve = linear_curve(&[(-10.0, 1.0), (10.0, 0.0)]);
        armor.penetration_damage_scalar_curve = linear_curve(&[(0.0, 1.0)]);
        armor
    }

    fn zone<'a>(results: &'a [ZoneCalculation], id: ZoneId) -> &'a ZoneCalculation {
        results.iter().find(|z| z.zone_id == id).unwrap()
    }

    #[test]
    fn test_one_result_per_zone() {
        let results = calculate_attacker_zones(&rifle(), &round(), &DefenderLoadout::unarmored(), 0.0, &BallisticsConstants::default());
        assert_eq!(results.len(), 18);
        let ids: Vec<ZoneId> = results.iter().map(|z| z.zone_id).collect();
        assert_eq!(ids, ZoneId::all().to_vec());
        assert!(results.iter().all(|z| !z.is_protected));
    }

    #[test]
    fn test_unarmored_metrics() {
        let results = calculate_attacker_zones(&rifle(), &round(), &DefenderLoadout::unarmored(), 0.0, &BallisticsConstants::default());

        let thorax = zone(&results, ZoneId::ThoraxFront);
        assert_eq!(thorax.shots_to_kill, 2);
        assert!((thorax.ttk - 0.1).abs() < 1e-12);
        assert!((thorax.cost_to_kill - 200.0).abs() < 1e-12);

        let head = zone(&results, ZoneId::HeadTop);
        assert_eq!(head.shots_to_kill, 1);
        assert_eq!(head.ttk, 0.0);

        // Full-body pool: 440 / 50 -> 9 shots
        let leg = zone(&results, ZoneId::LeftLeg);
        assert_eq!(leg.shots_to_kill, 9);
    }

    #[test]
    fn test_armor_changes_protected_zones_only() {
        let loadout = DefenderLoadout::unarmored().with_body_armor(plate(), 100.0);
        let results = calculate_attacker_zones(&rifle(), &round(), &loadout, 0.0, &BallisticsConstants::default());

        let thorax = zone(&results, ZoneId::ThoraxFront);
        assert!(thorax.is_protected);
        assert_eq!(thorax.protection, ProtectionSource::Armor);
        assert!((thorax.armor_class - 60.0).abs() < f64::EPSILON);
        assert!(thorax.shots_to_kill > 2);

        let head = zone(&results, ZoneId::HeadTop);
        assert!(!head.is_protected);
        assert_eq!(head.shots_to_kill, 1);
    }

    #[test]
    fn test_capped_zone_is_infinite() {
        let mut armor = plate();
        armor.durability_damage_scalar = 0.0;
        armor.blunt_damage_scalar = 0.0;
        let loadout = DefenderLoadout::unarmored().with_body_armor(armor, 100.0);
        let results = calculate_attacker_zones(&rifle(), &round(), &loadout, 0.0, &BallisticsConstants::default());

        let thorax = zone(&results, ZoneId::ThoraxFront);
        assert_eq!(thorax.shots_to_kill, 100);
        assert!(thorax.ttk.is_infinite());
        assert!(!thorax.is_viable());
    }

    #[test]
    fn test_capped_zone_round_trips_through_json() {
        let mut armor = plate();
        armor.durability_damage_scalar = 0.0;
        armor.blunt_damage_scalar = 0.0;
        let loadout = DefenderLoadout::unarmored().with_body_armor(armor, 100.0);
        let attackers = vec![Attacker::new(rifle(), round())];
        let matchups = calculate_matchups(&attackers, &loadout, 0.0, &BallisticsConstants::default());

        let thorax = zone(&matchups[0].zones, ZoneId::ThoraxFront);
        let json = serde_json::to_string(thorax).unwrap();
        assert!(json.contains(r#""ttk":"inf""#));
        let back: ZoneCalculation = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, thorax);
        assert!(!back.is_viable());

        let json = serde_json::to_string(&matchups).unwrap();
        let back: Vec<AttackerZones> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[0].zones.len(), 18);
        assert!(zone(&back[0].zones, ZoneId::ThoraxFront).ttk.is_infinite());
        assert_eq!(back[0].summary.best_zone, matchups[0].summary.best_zone);
    }

    #[test]
    fn test_sorting_is_stable() {
        let mut results = calculate_attacker_zones(&rifle(), &round(), &DefenderLoadout::unarmored(), 0.0, &BallisticsConstants::default());

        sort_zones(&mut results, ZoneSort::Ttk);
        assert_eq!(results[0].zone_id, ZoneId::HeadTop);
        assert_eq!(results[5].zone_id, ZoneId::HeadFace);
        assert_eq!(results[6].zone_id, ZoneId::ThoraxFront);
        assert!(results.windows(2).all(|w| w[0].ttk <= w[1].ttk));

        sort_zones(&mut results, ZoneSort::ShotsToKill);
        assert!(results.windows(2).all(|w| w[0].shots_to_kill >= w[1].shots_to_kill));
        // Stomach zones come before limbs among the 9-shot zones
        assert_eq!(results[0].zone_id, ZoneId::StomachFront);

        sort_zones(&mut results, ZoneSort::CostToKill);
        assert!(results.windows(2).all(|w| w[0].cost_to_kill <= w[1].cost_to_kill));
    }

    #[test]
    fn test_matchups() {
        let attackers = vec![
            Attacker::new(rifle(), round()),
            Attacker::new(
                WeaponProfile::new("mp5", "MP5", "9x19", 800.0),
                AmmoProfile::new("pst", "PST", "9x19", 54.0, 20.0).with_price(60.0),
            ),
        ];
        let matchups = calculate_matchups(&attackers, &DefenderLoadout::unarmored(), 0.0, &BallisticsConstants::default());
        assert_eq!(matchups.len(), 2);
        assert_eq!(matchups[1].ammo_id, "pst");
        assert_eq!(matchups[1].zones.len(), 18);
        assert_eq!(matchups[0].summary.viable_zones, 18);
    }
}
