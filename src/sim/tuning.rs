//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives in [`Tuning`]. The
//! defaults come from [`crate::consts`]; the native binary can override them
//! from a JSON file.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay constants for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub world_width: f32,
    pub world_height: f32,
    pub player_x: f32,
    pub player_size: f32,
    pub gravity: f32,
    pub boost_power: f32,
    pub obstacle_width: f32,
    pub base_gap: f32,
    pub min_gap: f32,
    pub gap_shrink_per_tier: f32,
    pub gap_margin: f32,
    pub base_speed: f32,
    pub max_speed: f32,
    pub speed_gain_per_tier: f32,
    pub spawn_spacing: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            player_x: PLAYER_X,
            player_size: PLAYER_SIZE,
            gravity: GRAVITY,
            boost_power: BOOST_POWER,
            obstacle_width: OBSTACLE_WIDTH,
            base_gap: BASE_GAP_HEIGHT,
            min_gap: MIN_GAP_HEIGHT,
            gap_shrink_per_tier: GAP_SHRINK_PER_TIER,
            gap_margin: GAP_MARGIN,
            base_speed: BASE_OBSTACLE_SPEED,
            max_speed: MAX_OBSTACLE_SPEED,
            speed_gain_per_tier: SPEED_GAIN_PER_TIER,
            spawn_spacing: SPAWN_SPACING,
        }
    }
}

impl Tuning {
    /// Horizontal hit radius (half the drawn ship)
    #[inline]
    pub fn player_radius(&self) -> f32 {
        self.player_size / 2.0
    }

    /// Vertical hit radius, narrower than the drawn ship
    #[inline]
    pub fn player_vertical_radius(&self) -> f32 {
        self.player_size / 3.0
    }

    /// Starting height of the ship
    #[inline]
    pub fn spawn_y(&self) -> f32 {
        self.world_height / 2.0
    }

    /// Parse tuning overrides from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
