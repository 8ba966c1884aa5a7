//! Game state and core simulation types
//!
//! Everything the simulation owns lives in [`GameSession`]. Cosmetic state
//! (particles, stars) belongs to the presentation layer in `crate::fx`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::tuning::Tuning;

/// Current status of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Title screen, nothing has happened yet
    #[default]
    Start,
    /// Fresh run, frozen until the first boost
    Waiting,
    /// Active gameplay
    Playing,
    /// Run ended by a collision
    GameOver,
}

/// The player's ship. Horizontal position is fixed by [`Tuning::player_x`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Vertical position of the ship center (pixels, down is positive)
    pub y: f32,
    /// Vertical velocity (pixels/frame)
    pub velocity: f32,
}

impl Player {
    pub fn new(y: f32) -> Self {
        Self { y, velocity: 0.0 }
    }
}

/// A pair of walls with a gap, scrolling right to left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Leading (left) edge
    pub x: f32,
    pub gap_center_y: f32,
    pub gap_height: f32,
    /// Scroll speed, fixed at spawn
    pub speed: f32,
    /// Set once the trailing edge has passed the ship
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, gap_center_y: f32, gap_height: f32, speed: f32) -> Self {
        Self {
            x,
            gap_center_y,
            gap_height,
            speed,
            passed: false,
        }
    }

    /// Top of the gap (bottom edge of the upper wall)
    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.gap_center_y - self.gap_height / 2.0
    }

    /// Bottom of the gap (top edge of the lower wall)
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_center_y + self.gap_height / 2.0
    }

    /// Trailing (right) edge
    #[inline]
    pub fn trailing_edge(&self, width: f32) -> f32 {
        self.x + width
    }
}

/// Outcome of a finished run, computed once at the game-over transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub final_score: u32,
    pub high_score: u32,
    /// The run tied or set the high score (and scored at least one point)
    pub new_high_score: bool,
}

impl RunSummary {
    pub fn new(final_score: u32, high_score: u32) -> Self {
        Self {
            final_score,
            high_score,
            new_high_score: final_score == high_score && final_score > 0,
        }
    }
}

/// Complete simulation state for one player session
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Seed the RNG was created from
    pub seed: u64,
    pub tuning: Tuning,
    pub status: GameStatus,
    pub player: Player,
    /// Live obstacles in spawn order (ascending x)
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub high_score: u32,
    /// Frames since the last reset; counts in every status
    pub frame_count: u64,
    /// Summary of the last finished run, until the next reset
    pub last_run: Option<RunSummary>,
    pub(crate) rng: Pcg32,
}

impl GameSession {
    /// Create a session on the start screen
    pub fn new(seed: u64, high_score: u32) -> Self {
        Self::with_tuning(seed, high_score, Tuning::default())
    }

    pub fn with_tuning(seed: u64, high_score: u32, tuning: Tuning) -> Self {
        let player = Player::new(tuning.spawn_y());
        Self {
            seed,
            tuning,
            status: GameStatus::Start,
            player,
            obstacles: Vec::new(),
            score: 0,
            high_score,
            frame_count: 0,
            last_run: None,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Put the session into a fresh `Waiting` run. The high score survives.
    pub fn reset(&mut self) {
        self.player = Player::new(self.tuning.spawn_y());
        self.obstacles.clear();
        self.score = 0;
        self.frame_count = 0;
        self.last_run = None;
        self.status = GameStatus::Waiting;
    }

    /// Difficulty tier for the current score
    #[inline]
    pub fn difficulty_tier(&self) -> f32 {
        super::spawner::difficulty_tier(self.score)
    }
}
