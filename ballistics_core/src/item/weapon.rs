//! WeaponProfile - the attacker's firearm

use super::AmmoProfile;
use serde::{Deserialize, Serialize};

/// Weapon stats relevant to kill timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponProfile {
    pub id: String,
    pub name: String,
    pub caliber: String,
    /// Rounds per minute
    pub fire_rate: f64,
}

impl WeaponProfile {
    pub fn new(id: &str, name: &str, caliber: &str, fire_rate: f64) -> Self {
        WeaponProfile {
            id: id.to_string(),
            name: name.to_string(),
            caliber: caliber.to_string(),
            fire_rate,
        }
    }

    /// Whether this weapon chambers the given ammunition
    pub fn accepts(&self, ammo: &AmmoProfile) -> bool {
        self.caliber.eq_ignore_ascii_case(&ammo.caliber)
    }

    /// Seconds between consecutive shots, infinite for a weapon that cannot fire
    pub fn seconds_per_shot(&self) -> f64 {
        if self.fire_rate > 0.0 {
            60.0 / self.fire_rate
        } else {
            f64::INFINITY
        }
    }

    /// Time to land `shots` hits, the first one landing at t = 0
    pub fn time_for_shots(&self, shots: u32) -> f64 {
        if shots <= 1 {
            return 0.0;
        }
        f64::from(shots - 1) * self.seconds_per_shot()
    }
}
