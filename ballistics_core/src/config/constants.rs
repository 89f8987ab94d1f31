//! Ballistics constants configuration

use super::ConfigError;
use crate::curve::{linear_curve, CurvePoint};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Empirical multiplier on every armor damage formula, fitted against
/// observed durability loss.
pub const ARMOR_DAMAGE_CALIBRATION: f64 = 3.0;

/// Safety cap on shots per simulation run. Hitting it means the target is
/// not practically killable.
pub const MAX_SHOTS: u32 = 100;

/// Tunable ballistics constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallisticsConstants {
    #[serde(default)]
    pub shot: ShotConstants,
    #[serde(default)]
    pub simulation: SimulationConstants,
    #[serde(default)]
    pub falloff: FalloffConstants,
    #[serde(default)]
    pub curves: CurveDefaults,
    #[serde(default)]
    pub distribution: DistributionConstants,
}

impl Default for BallisticsConstants {
    fn default() -> Self {
        BallisticsConstants {
            shot: ShotConstants::default(),
            simulation: SimulationConstants::default(),
            falloff: FalloffConstants::default(),
            curves: CurveDefaults::default(),
            distribution: DistributionConstants::default(),
        }
    }
}

impl BallisticsConstants {
    /// Reject values that would break termination or produce NaNs
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.max_shots == 0 {
            return Err(ConfigError::ValidationError(
                "simulation.max_shots must be at least 1".to_string(),
            ));
        }
        if self.shot.armor_damage_calibration < 0.0 {
            return Err(ConfigError::ValidationError(
                "shot.armor_damage_calibration must not be negative".to_string(),
            ));
        }
        if self.falloff.curve_units_per_meter <= 0.0 {
            return Err(ConfigError::ValidationError(
                "falloff.curve_units_per_meter must be positive".to_string(),
            ));
        }
        if self.falloff.damage_range <= 0.0 || self.falloff.penetration_range <= 0.0 {
            return Err(ConfigError::ValidationError(
                "falloff ranges must be positive".to_string(),
            ));
        }
        if self.falloff.range_buckets.contains(&0) {
            return Err(ConfigError::ValidationError(
                "falloff.range_buckets must not contain 0".to_string(),
            ));
        }
        if self.distribution.max_shots == 0
            || self.distribution.damage_resolution <= 0.0
            || self.distribution.max_bins == 0
        {
            return Err(ConfigError::ValidationError(
                "distribution.max_shots, damage_resolution and max_bins must be positive"
                    .to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.distribution.significance) {
            return Err(ConfigError::ValidationError(
                "distribution.significance must be in [0, 1)".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotConstants {
    /// Multiplier applied to armor damage (see `ARMOR_DAMAGE_CALIBRATION`)
    #[serde(default = "default_armor_damage_calibration")]
    pub armor_damage_calibration: f64,
    /// Fallback when ammo has no blunt damage scale
    #[serde(default = "default_blunt_damage_scale")]
    pub default_blunt_damage_scale: f64,
    /// Fallback when ammo has no penetrated gear damage scale
    #[serde(default = "default_penetrated_gear_damage_scale")]
    pub default_penetrated_gear_damage_scale: f64,
    /// Fallback when ammo has no blunt gear damage scale
    #[serde(default = "default_blunt_gear_damage_scale")]
    pub default_blunt_gear_damage_scale: f64,
    /// Deterministic mode penetrates when chance is strictly above this
    #[serde(default = "default_penetration_threshold")]
    pub penetration_threshold: f64,
}

impl Default for ShotConstants {
    fn default() -> Self {
        ShotConstants {
            armor_damage_calibration: ARMOR_DAMAGE_CALIBRATION,
            default_blunt_damage_scale: 0.1,
            default_penetrated_gear_damage_scale: 0.5,
            default_blunt_gear_damage_scale: 0.9,
            penetration_threshold: 0.5,
        }
    }
}

fn default_armor_damage_calibration() -> f64 {
    ARMOR_DAMAGE_CALIBRATION
}
fn default_blunt_damage_scale() -> f64 {
    0.1
}
fn default_penetrated_gear_damage_scale() -> f64 {
    0.5
}
fn default_blunt_gear_damage_scale() -> f64 {
    0.9
}
fn default_penetration_threshold() -> f64 {
    0.5
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConstants {
    #[serde(default = "default_max_shots")]
    pub max_shots: u32,
}

impl Default for SimulationConstants {
    fn default() -> Self {
        SimulationConstants {
            max_shots: MAX_SHOTS,
        }
    }
}

fn default_max_shots() -> u32 {
    MAX_SHOTS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FalloffConstants {
    /// Distances (meters) with discrete game samples
    #[serde(default = "default_range_buckets")]
    pub range_buckets: Vec<u32>,
    /// Curve inputs are centimeters
    #[serde(default = "default_curve_units_per_meter")]
    pub curve_units_per_meter: f64,
    /// Linear damage falloff: lose `damage_drop` of base per `damage_range` meters
    #[serde(default = "default_damage_range")]
    pub damage_range: f64,
    #[serde(default = "default_damage_drop")]
    pub damage_drop: f64,
    #[serde(default = "default_damage_floor")]
    pub damage_floor: f64,
    #[serde(default = "default_penetration_range")]
    pub penetration_range: f64,
    #[serde(default = "default_penetration_drop")]
    pub penetration_drop: f64,
    #[serde(default = "default_penetration_floor")]
    pub penetration_floor: f64,
}

impl Default for FalloffConstants {
    fn default() -> Self {
        FalloffConstants {
            range_buckets: default_range_buckets(),
            curve_units_per_meter: 100.0,
            damage_range: 1000.0,
            damage_drop: 0.3,
            damage_floor: 0.5,
            penetration_range: 1500.0,
            penetration_drop: 0.25,
            penetration_floor: 0.6,
        }
    }
}

fn default_range_buckets() -> Vec<u32> {
    vec![10, 25, 50, 75, 100, 125, 150, 200, 250, 300, 400, 500, 600]
}
fn default_curve_units_per_meter() -> f64 {
    100.0
}
fn default_damage_range() -> f64 {
    1000.0
}
fn default_damage_drop() -> f64 {
    0.3
}
fn default_damage_floor() -> f64 {
    0.5
}
fn default_penetration_range() -> f64 {
    1500.0
}
fn default_penetration_drop() -> f64 {
    0.25
}
fn default_penetration_floor() -> f64 {
    0.6
}

/// Curves used when an armor record ships without its own
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveDefaults {
    #[serde(default = "default_penetration_chance_curve")]
    pub penetration_chance: Vec<CurvePoint>,
    #[serde(default = "default_penetration_damage_scalar_curve")]
    pub penetration_damage_scalar: Vec<CurvePoint>,
}

impl Default for CurveDefaults {
    fn default() -> Self {
        CurveDefaults {
            penetration_chance: default_penetration_chance_curve(),
            penetration_damage_scalar: default_penetration_damage_scalar_curve(),
        }
    }
}

fn default_penetration_chance_curve() -> Vec<CurvePoint> {
    linear_curve(&[(-20.0, 1.0), (-5.0, 0.9), (0.0, 0.6), (10.0, 0.1), (20.0, 0.0)])
}
fn default_penetration_damage_scalar_curve() -> Vec<CurvePoint> {
    linear_curve(&[(0.0, 1.0), (10.0, 0.6), (20.0, 0.4)])
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionConstants {
    /// Default shot horizon for the estimator
    #[serde(default = "default_distribution_max_shots")]
    pub max_shots: u32,
    /// DP bins per HP point
    #[serde(default = "default_damage_resolution")]
    pub damage_resolution: f64,
    /// Probabilities below this are outside the reported support
    #[serde(default = "default_significance")]
    pub significance: f64,
    /// Penetration chance at which the estimator skips the DP
    #[serde(default = "default_degenerate_chance")]
    pub degenerate_chance: f64,
    /// Upper bound on DP bins; larger targets get a coarser resolution
    #[serde(default = "default_max_bins")]
    pub max_bins: usize,
}

impl Default for DistributionConstants {
    fn default() -> Self {
        DistributionConstants {
            max_shots: 30,
            damage_resolution: 10.0,
            significance: 0.001,
            degenerate_chance: 0.99,
            max_bins: 100_000,
        }
    }
}

fn default_distribution_max_shots() -> u32 {
    30
}
fn default_damage_resolution() -> f64 {
    10.0
}
fn default_significance() -> f64 {
    0.001
}
fn default_degenerate_chance() -> f64 {
    0.99
}
fn default_max_bins() -> usize {
    100_000
}

/// Load constants from a TOML file and validate them
pub fn load_constants(path: &Path) -> Result<BallisticsConstants, ConfigError> {
    let constants: BallisticsConstants = super::load_toml(path)?;
    constants.validate()?;
    Ok(constants)
}

/// Load constants from a TOML string and validate them
pub fn parse_constants(content: &str) -> Result<BallisticsConstants, ConfigError> {
    let constants: BallisticsConstants = super::parse_toml(content)?;
    constants.validate()?;
    Ok(constants)
}

/// Constants shipped with the crate
pub fn default_constants() -> BallisticsConstants {
    let toml = include_str!("../../config/constants.toml");
    parse_constants(toml).unwrap_or_else(|err| {
        warn!(error = %err, "bundled constants rejected, using built-in defaults");
        BallisticsConstants::default()
    })
}
