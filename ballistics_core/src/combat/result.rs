//! CombatSimulationResult - outcome of a multi-shot run

use serde::{Deserialize, Serialize};

/// One recorded shot with the state it left behind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotLogEntry {
    /// 1-based
    pub shot_number: u32,
    pub is_penetrating: bool,
    pub penetration_chance: f64,
    pub damage_to_body_part: f64,
    pub damage_to_armor: f64,
    pub armor_durability_after: f64,
    pub hp_after: f64,
}

/// Result of simulating shots against one zone until death or the safety cap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatSimulationResult {
    pub shots_to_kill: u32,
    pub starting_armor_durability: f64,
    pub final_armor_durability: f64,
    pub total_damage_dealt: f64,
    /// HP pool the run started from
    pub starting_hp: f64,
    pub remaining_hp: f64,
    /// False when the safety cap stopped the run
    pub killed: bool,
    pub shots: Vec<ShotLogEntry>,
}

impl CombatSimulationResult {
    /// Empty result before any shot
    pub fn new(starting_hp: f64, starting_durability: f64) -> Self {
        CombatSimulationResult {
            shots_to_kill: 0,
            starting_armor_durability: starting_durability,
            final_armor_durability: starting_durability,
            total_damage_dealt: 0.0,
            starting_hp,
            remaining_hp: starting_hp,
            killed: false,
            shots: Vec::new(),
        }
    }

    /// The run ended on the safety cap: treat as not practically killable
    pub fn is_capped(&self) -> bool {
        !self.killed
    }

    pub fn penetrating_shots(&self) -> usize {
        self.shots.iter().filter(|s| s.is_penetrating).count()
    }

    /// Durability actually removed over the run
    ///
    /// Per-shot `damage_to_armor` can exceed what is left on the plate; this
    /// only counts what came off.
    pub fn armor_damage_dealt(&self) -> f64 {
        (self.starting_armor_durability - self.final_armor_durability).max(0.0)
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{} shots", self.shots_to_kill)];

        let penetrating = self.penetrating_shots();
        if penetrating > 0 {
            parts.push(format!("{penetrating} penetrating"));
        }

        parts.push(format!("{:.0} damage dealt", self.total_damage_dealt));

        if self.final_armor_durability > 0.0 || self.armor_damage_dealt() > 0.0 {
            parts.push(format!("{:.1} armor left", self.final_armor_durability));
        }

        if self.killed {
            parts.push("FATAL".to_string());
        } else {
            parts.push("NOT KILLED".to_string());
        }

        parts.join(", ")
    }
}
