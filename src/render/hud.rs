//! HUD widget state
//!
//! The score, high score and difficulty widgets plus the start and game-over
//! overlays only need touching when a value changes. [`Hud`] remembers what it
//! last showed and yields the minimal set of [`HudUpdate`]s per frame.

use super::RenderSnapshot;
use crate::sim::{DifficultyLabel, GameStatus, RunSummary};

/// Which overlay is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Title screen
    Start,
    /// In-canvas "press to start" hint
    WaitingHint,
    /// No overlay while flying
    None,
    /// Final score panel
    GameOver(RunSummary),
}

impl Overlay {
    pub fn for_status(status: GameStatus, last_run: Option<RunSummary>) -> Self {
        match (status, last_run) {
            (GameStatus::Start, _) => Overlay::Start,
            (GameStatus::Waiting, _) => Overlay::WaitingHint,
            (GameStatus::Playing, _) => Overlay::None,
            (GameStatus::GameOver, Some(summary)) => Overlay::GameOver(summary),
            // A game over always records its run; show a blank panel otherwise
            (GameStatus::GameOver, None) => Overlay::GameOver(RunSummary::new(0, 0)),
        }
    }
}

/// One widget change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HudUpdate {
    Score(String),
    HighScore(String),
    Difficulty(&'static str),
    Overlay(Overlay),
}

/// Values the HUD currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Shown {
    score: u32,
    high_score: u32,
    difficulty: DifficultyLabel,
    overlay: Overlay,
}

/// Tracks displayed widget values between frames
#[derive(Debug, Clone, Default)]
pub struct Hud {
    shown: Option<Shown>,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diff the snapshot against what is on screen. The first call emits everything.
    pub fn update(&mut self, snapshot: &RenderSnapshot<'_>) -> Vec<HudUpdate> {
        let next = Shown {
            score: snapshot.score,
            high_score: snapshot.high_score,
            difficulty: snapshot.difficulty,
            overlay: Overlay::for_status(snapshot.status, snapshot.last_run),
        };

        let mut updates = Vec::new();
        let prev = self.shown;

        if prev.map(|p| p.score) != Some(next.score) {
            updates.push(HudUpdate::Score(next.score.to_string()));
        }
        if prev.map(|p| p.high_score) != Some(next.high_score) {
            updates.push(HudUpdate::HighScore(next.high_score.to_string()));
        }
        if prev.map(|p| p.difficulty) != Some(next.difficulty) {
            updates.push(HudUpdate::Difficulty(next.difficulty.as_str()));
        }
        if prev.map(|p| p.overlay) != Some(next.overlay) {
            updates.push(HudUpdate::Overlay(next.overlay));
        }

        self.shown = Some(next);
        updates
    }
}
