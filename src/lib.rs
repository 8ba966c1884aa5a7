//! Neon Boost - a one-button neon arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, game state)
//! - `fx`: Cosmetic particles and starfield
//! - `render`: Render snapshot, sink trait, HUD and canvas drawing
//! - `persistence`: Single-integer high score stores
//! - `highscores`: Scoring gateway between the simulation and a store
//! - `game`: Presentation adapter that wires all of the above per frame

pub mod fx;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod render;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use highscores::HighScoreGateway;
pub use settings::{QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// World (canvas) dimensions in pixels
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Fixed horizontal position of the ship
    pub const PLAYER_X: f32 = 120.0;
    /// Drawn ship size; horizontal hit radius is half, vertical is a third
    pub const PLAYER_SIZE: f32 = 30.0;

    /// Downward acceleration (pixels/frame²)
    pub const GRAVITY: f32 = 0.35;
    /// Vertical velocity assigned by a boost (pixels/frame, negative is up)
    pub const BOOST_POWER: f32 = -8.0;

    /// Obstacle geometry
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const BASE_GAP_HEIGHT: f32 = 180.0;
    pub const MIN_GAP_HEIGHT: f32 = 120.0;
    /// Shrink of the gap per difficulty tier step
    pub const GAP_SHRINK_PER_TIER: f32 = 10.0;
    /// Gaps never come closer than this to the top/bottom edge
    pub const GAP_MARGIN: f32 = 50.0;

    /// Obstacle speed (pixels/frame)
    pub const BASE_OBSTACLE_SPEED: f32 = 3.0;
    pub const MAX_OBSTACLE_SPEED: f32 = 7.0;
    pub const SPEED_GAIN_PER_TIER: f32 = 0.5;

    /// Horizontal distance the newest obstacle travels before the next spawns
    pub const SPAWN_SPACING: f32 = 300.0;

    /// Difficulty steps up every this many points
    pub const POINTS_PER_DIFFICULTY_STEP: u32 = 5;
    pub const DIFFICULTY_STEP: f32 = 0.2;

    /// Cosmetic effect constants
    pub const STAR_COUNT: usize = 100;
    pub const BOOST_PARTICLES: u32 = 5;
    pub const EXPLOSION_PARTICLES: u32 = 30;
    /// A trail particle is emitted every N playing frames
    pub const TRAIL_INTERVAL: u64 = 2;
    pub const GRID_SPACING: f32 = 50.0;
    pub const GRID_SCROLL_SPEED: u64 = 2;

    /// Storage key for the persisted high score
    pub const HIGH_SCORE_KEY: &str = "neonBoostHighScore";
}
