//! Integration test: Catalog -> Loadout -> Zone matchups -> Distribution
//!
//! Walks the full flow from item data to per-zone kill metrics, plus the
//! reference scenarios for unarmored kills, armor wear and range tables.

use ballistics_core::{
    analysis::{calculate_matchups, estimate, sort_zones, Attacker, ZoneSort},
    ballistics::{armor_effectiveness, calculate_shot, resolve_damage, PenetrationRoll},
    combat::simulate,
    config::{default_constants, parse_catalog_json, BallisticsConstants, ConfigError},
    curve::{linear_curve, CurvePoint},
    item::{AmmoProfile, ArmorProfile, ProtectiveData, RangeTable, WeaponProfile},
    types::{ProtectionSource, ZoneId},
    zones::{self, DefenderLoadout},
    calculate_attacker_zones,
};

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

fn constants() -> BallisticsConstants {
    default_constants()
}

/// Class 4 vest: chance 0.92 at differential -1 down to 0.05 at 3
fn class4_vest() -> ArmorProfile {
    let mut armor = ArmorProfile::new("vest", "Class 4 Vest", 4.0, 40.0);
    armor.durability_damage_scalar = 0.5;
    armor.blunt_damage_scalar = 0.5;
    armor.penetration_chance_curve = linear_curve(&[(-1.0, 0.92), (3.0, 0.05)]);
    armor.penetration_damage_scalar_curve = linear_curve(&[(0.0, 1.0)]);
    armor
}

fn low_pen_round() -> AmmoProfile {
    AmmoProfile::new("pst", "9x19 PSO", "9x19", 40.0, 1.0).with_price(50.0)
}

#[test]
fn test_unarmored_thorax_two_shots() {
    separator("SCENARIO A: UNARMORED");

    let weapon = WeaponProfile::new("ak", "AK", "7.62x39", 600.0);
    let ammo = AmmoProfile::new("ps", "PS", "7.62x39", 50.0, 35.0);

    let result = simulate(&ammo, None, 85.0, true, 0.0, &constants());
    println!("  {}", result.summary());

    assert_eq!(result.shots_to_kill, 2);
    assert!(result.killed);
    let ttk = weapon.time_for_shots(result.shots_to_kill);
    assert!((ttk - 60.0 / 600.0).abs() < 1e-12);
}

#[test]
fn test_full_durability_blunts() {
    separator("SCENARIO B: FULL DURABILITY");

    let armor = class4_vest();
    let ammo = low_pen_round();
    let shot = calculate_shot(&ammo, Some(&armor), 40.0, 0.0, PenetrationRoll::Deterministic, &constants());
    println!("  chance {:.3}, body {:.2}", shot.penetration_chance, shot.damage_to_body_part);

    assert!(!shot.is_penetrating);
    assert!((shot.penetration_chance - 0.05).abs() < 1e-9);
    // 40 * 0.1 (default blunt scale) * 0.5
    assert!((shot.damage_to_body_part - 2.0).abs() < 1e-9);
}

#[test]
fn test_zero_durability_penetrates() {
    separator("SCENARIO C: ZERO DURABILITY");

    let armor = class4_vest();
    let ammo = low_pen_round();
    assert!(armor_effectiveness(&armor, 0.0).abs() < 1e-12);

    let shot = calculate_shot(&ammo, Some(&armor), 0.0, 0.0, PenetrationRoll::Deterministic, &constants());
    println!("  chance {:.3}, body {:.2}", shot.penetration_chance, shot.damage_to_body_part);

    assert!(shot.is_penetrating);
    assert!((shot.penetration_chance - 0.92).abs() < 1e-9);
    assert!((shot.damage_to_body_part - 40.0).abs() < 1e-9);
}

#[test]
fn test_range_table_beats_curve() {
    separator("SCENARIO D: RANGE TABLE");

    let mut ammo = AmmoProfile::new("bs", "BS", "5.45x39", 50.0, 50.0);
    ammo.damage_at_range = Some(RangeTable::new().with(100, 43.0));
    ammo.damage_over_distance = vec![CurvePoint::linear(0.0, 1.0), CurvePoint::linear(60_000.0, 0.4)];

    let constants = constants();
    assert_eq!(resolve_damage(&ammo, 100.0, &constants), 43.0);
    // Bucket without an entry: base value, curve still ignored
    assert_eq!(resolve_damage(&ammo, 200.0, &constants), 50.0);
    // Between buckets: curve multiplier at 11000 cm
    let expected = 50.0 * (1.0 - 0.6 * 11_000.0 / 60_000.0);
    assert!((resolve_damage(&ammo, 110.0, &constants) - expected).abs() < 1e-9);
}

#[test]
fn test_armor_wear_changes_outcome() {
    separator("ARMOR WEAR");

    let result = simulate(&low_pen_round(), Some(&class4_vest()), 85.0, true, 0.0, &constants());
    for shot in &result.shots {
        println!(
            "  #{} pen={} body={:.1} armor_after={:.1} hp_after={:.1}",
            shot.shot_number, shot.is_penetrating, shot.damage_to_body_part, shot.armor_durability_after, shot.hp_after
        );
    }

    // Blunt first shot strips the plate, then three penetrating hits
    assert_eq!(result.shots_to_kill, 4);
    assert!(!result.shots[0].is_penetrating);
    assert_eq!(result.shots[0].armor_durability_after, 0.0);
    assert!(result.shots[1..].iter().all(|s| s.is_penetrating));
    assert_eq!(result.penetrating_shots(), 3);
}

#[test]
fn test_loadout_zone_coverage() {
    separator("LOADOUT COVERAGE");

    let mut helmet = ArmorProfile::new("helmet", "Helmet", 3.0, 30.0);
    helmet.protective_data.push(ProtectiveData {
        zone: ZoneId::HeadEars,
        armor_class: 2.0,
        blunt_damage_scalar: 0.6,
        protection_angle: 0.0,
    });
    let loadout = DefenderLoadout::unarmored()
        .with_body_armor(class4_vest(), 50.0)
        .with_helmet(helmet, 100.0);

    let weapon = WeaponProfile::new("glock", "Glock 17", "9x19", 900.0);
    let results = calculate_attacker_zones(&weapon, &low_pen_round(), &loadout, 0.0, &constants());
    assert_eq!(results.len(), zones::zones().len());

    let find = |id: ZoneId| results.iter().find(|z| z.zone_id == id).unwrap();

    let top = find(ZoneId::HeadTop);
    assert!(top.is_protected);
    assert_eq!(top.protection, ProtectionSource::Helmet);
    assert_eq!(top.armor_class, 3.0);

    assert_eq!(find(ZoneId::HeadEars).armor_class, 2.0);

    // No face shield: eyes and jaw are bare, face is never covered
    assert!(!find(ZoneId::HeadEyes).is_protected);
    assert!(!find(ZoneId::HeadJaws).is_protected);
    assert!(!find(ZoneId::HeadFace).is_protected);

    let thorax = find(ZoneId::ThoraxFront);
    assert!(thorax.is_protected);
    assert_eq!(thorax.protection, ProtectionSource::Armor);
    assert_eq!(thorax.simulation.shots[0].armor_durability_after, 0.0);

    let arm = find(ZoneId::LeftArm);
    assert!(!arm.is_protected);
    // Non-vital zones drain the 440 HP body pool
    assert_eq!(arm.shots_to_kill, 11);

    let shielded = loadout.clone().with_face_shield();
    assert!(zones::zone_protection(ZoneId::HeadEyes, &shielded).is_some());
}

#[test]
fn test_catalog_matchups() {
    separator("CATALOG MATCHUPS");

    let json = r#"{
        "items": [
            {"category": "weapon", "id": "ak74", "name": "AK-74", "caliber": "5.45x39", "fire_rate": 600.0},
            {"category": "weapon", "id": "mp5", "name": "MP5", "caliber": "9x19", "fire_rate": 800.0},
            {"category": "ammo", "id": "bs", "name": "BS", "caliber": "5.45x39", "price": 400.0,
             "damage": 45.0, "penetration": 54.0},
            {"category": "ammo", "id": "pso", "name": "PSO", "caliber": "9x19", "price": 30.0,
             "damage": 60.0, "penetration": 10.0},
            {"category": "armor", "id": "plate", "name": "Plate", "armor_class": 40.0, "max_durability": 60.0}
        ]
    }"#;
    let catalog = parse_catalog_json(json).unwrap();
    assert_eq!(catalog.len(), 5);

    assert!(matches!(catalog.weapon("bs"), Err(ConfigError::WrongCategory { .. })));
    assert!(matches!(catalog.ammo("missing"), Err(ConfigError::UnknownItem(_))));

    let attackers: Vec<Attacker> = ["ak74", "mp5"]
        .iter()
        .map(|id| {
            let weapon = catalog.weapon(id).unwrap().clone();
            let ammo = catalog.ammo_for(&weapon).next().unwrap().clone();
            Attacker::new(weapon, ammo)
        })
        .collect();

    let loadout = DefenderLoadout::unarmored().with_body_armor(catalog.armor("plate").unwrap().clone(), 100.0);
    let matchups = calculate_matchups(&attackers, &loadout, 0.0, &constants());
    assert_eq!(matchups.len(), 2);

    for matchup in &matchups {
        println!(
            "  {} / {}: best {:?} {:.3}s, {} viable",
            matchup.weapon_id, matchup.ammo_id, matchup.summary.best_zone, matchup.summary.best_ttk, matchup.summary.viable_zones
        );
        assert_eq!(matchup.zones.len(), 18);
    }

    let bs = &matchups[0];
    assert_eq!(bs.ammo_id, "bs");
    let thorax = bs.zones.iter().find(|z| z.zone_id == ZoneId::ThoraxFront).unwrap();
    // Differential 40 - 54 = -14: well above the 0.5 threshold
    assert!(thorax.simulation.shots[0].is_penetrating);

    // 9x19 against class 40 only ever blunts
    let pso = &matchups[1];
    let thorax = pso.zones.iter().find(|z| z.zone_id == ZoneId::ThoraxFront).unwrap();
    assert!(!thorax.simulation.shots[0].is_penetrating);
    // Head is bare for both
    assert!(pso.summary.best_ttk <= thorax.ttk);

    let mut sorted = bs.zones.clone();
    sort_zones(&mut sorted, ZoneSort::CostToKill);
    assert!(sorted.windows(2).all(|w| w[0].cost_to_kill <= w[1].cost_to_kill));
}

#[test]
fn test_distribution_against_wearing_armor() {
    separator("SHOT DISTRIBUTION");

    let dist = estimate(&low_pen_round(), Some(&class4_vest()), 85.0, 0.0, &constants());
    for p in &dist.distribution {
        if p.probability > 0.01 {
            println!("  {:>2} shots: {:.3}", p.shots, p.probability);
        }
    }
    println!("  expected {:.2}, range {}-{}", dist.expected_stk, dist.min_stk, dist.max_stk);

    let total: f64 = dist.distribution.iter().map(|p| p.probability).sum();
    assert!((total - 1.0).abs() < 1e-9);
    // Two penetrating hits and a blunt one leave 3 HP
    assert_eq!(dist.min_stk, 3);
    assert!(dist.expected_stk > 3.0 && dist.expected_stk < 30.0);
    assert!(dist.max_stk >= dist.min_stk);
    assert!((dist.cumulative(30) - 1.0).abs() < 1e-9);
}

#[test]
fn test_unarmored_distribution_is_single_point() {
    let ammo = AmmoProfile::new("ps", "PS", "7.62x39", 50.0, 35.0);
    let dist = estimate(&ammo, None, 85.0, 0.0, &constants());
    assert_eq!(dist.distribution.len(), 1);
    assert_eq!(dist.min_stk, 2);
    assert_eq!(dist.max_stk, 2);
    assert_eq!(dist.expected_stk, 2.0);
}
