//! Ballistics - range falloff and single-shot armor interaction

mod falloff;
mod shot;

pub use falloff::{fallback_factor, resolve, resolve_damage, resolve_penetration};
pub use shot::{
    armor_effectiveness, calculate_shot, calculate_shot_with_rng, PenetrationRoll, ShotResult,
};
