//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per `advance()` call, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod tuning;

pub use physics::Collision;
pub use spawner::{DifficultyLabel, difficulty_label, difficulty_tier, gap_height, obstacle_speed};
pub use state::{GameSession, GameStatus, Obstacle, Player, RunSummary};
pub use tick::{ParticleKind, SimEvent, advance, handle_boost};
pub use tuning::Tuning;
