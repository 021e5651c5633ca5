//! Data-driven game balance
//!
//! Ship handling is tiered by level: higher levels turn faster and fire
//! sooner, while thrust and drag stay fixed across the whole run.

use serde::{Deserialize, Serialize};

/// Ship handling parameters for one level.
///
/// These are constants for the ship's lifetime within a level; the level
/// director builds a fresh ship from the tier table at every level setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipTuning {
    /// Thrust added to velocity per tick while accelerating
    pub acceleration: f32,
    /// Multiplicative velocity damping per tick (0..1)
    pub velocity_decay: f32,
    /// Turn rate in radians per tick
    pub turn_rate: f32,
    /// Minimum ticks between shots
    pub shot_cooldown: u32,
}

impl ShipTuning {
    /// The handling tier for a level.
    ///
    /// Early levels are deliberately sluggish; later tiers sharpen the turn
    /// rate and shrink the fire cooldown.
    pub fn for_level(level: u32) -> Self {
        let (turn_rate, shot_cooldown) = match level {
            0..=2 => (0.10, 12),
            3 => (0.15, 10),
            4 => (0.20, 9),
            5 => (0.30, 7),
            _ => (0.45, 5),
        };
        Self {
            acceleration: 0.35,
            velocity_decay: 0.98,
            turn_rate,
            shot_cooldown,
        }
    }
}
