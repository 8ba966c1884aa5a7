//! Rendering module
//!
//! The simulation never draws. Once per frame the game hands a
//! [`RenderSnapshot`] to a [`RenderSink`]; the browser build paints it on a
//! 2D canvas, the native demo logs it.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod hud;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use hud::{Hud, HudUpdate, Overlay};

use crate::fx::{Particle, Star};
use crate::sim::{DifficultyLabel, GameStatus, Obstacle, Player, RunSummary, Tuning};

/// Everything a sink needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct RenderSnapshot<'a> {
    pub tuning: &'a Tuning,
    pub status: GameStatus,
    pub player: Player,
    pub obstacles: &'a [Obstacle],
    pub particles: &'a [Particle],
    pub stars: &'a [Star],
    pub score: u32,
    pub high_score: u32,
    pub difficulty: DifficultyLabel,
    pub last_run: Option<RunSummary>,
    /// Frames since the last reset, drives background scroll
    pub frame: u64,
}

impl RenderSnapshot<'_> {
    /// The ship is hidden once it has exploded
    #[inline]
    pub fn ship_visible(&self) -> bool {
        self.status != GameStatus::GameOver
    }
}

/// Consumer of per-frame snapshots
pub trait RenderSink {
    fn draw(&mut self, snapshot: &RenderSnapshot<'_>);
}

/// Headless sink that logs a status line every `every` frames
#[derive(Debug, Clone)]
pub struct LogSink {
    every: u64,
    frames: u64,
}

impl LogSink {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
        }
    }

    /// Frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for LogSink {
    fn draw(&mut self, snapshot: &RenderSnapshot<'_>) {
        self.frames += 1;
        if self.frames % self.every != 0 {
            return;
        }
        log::info!(
            "[{:?}] y={:.1} v={:.2} obstacles={} particles={} score={} best={} {}",
            snapshot.status,
            snapshot.player.y,
            snapshot.player.velocity,
            snapshot.obstacles.len(),
            snapshot.particles.len(),
            snapshot.score,
            snapshot.high_score,
            snapshot.difficulty.as_str()
        );
    }
}
