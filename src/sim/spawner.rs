//! Obstacle spawning and the difficulty curve
//!
//! Difficulty is a pure function of score and is never cached. Gap height and
//! speed are sampled from it when an obstacle spawns and then stay fixed on
//! that obstacle.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{GameSession, Obstacle};
use super::tuning::Tuning;
use crate::consts::{DIFFICULTY_STEP, POINTS_PER_DIFFICULTY_STEP};

/// Display label for a difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyLabel {
    Easy,
    Normal,
    Hard,
    Extreme,
    Insane,
    /// Fallback past the end of the table; the index clamp makes it unreachable
    Legendary,
}

const LABELS: [DifficultyLabel; 5] = [
    DifficultyLabel::Easy,
    DifficultyLabel::Normal,
    DifficultyLabel::Hard,
    DifficultyLabel::Extreme,
    DifficultyLabel::Insane,
];

impl DifficultyLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLabel::Easy => "EASY",
            DifficultyLabel::Normal => "NORMAL",
            DifficultyLabel::Hard => "HARD",
            DifficultyLabel::Extreme => "EXTREME",
            DifficultyLabel::Insane => "INSANE",
            DifficultyLabel::Legendary => "LEGENDARY",
        }
    }

    /// Label for a tier: `floor(tier) - 1`, clamped to the table
    pub fn for_tier(tier: f32) -> Self {
        let index = (tier.floor() as i64 - 1).min(LABELS.len() as i64 - 1);
        usize::try_from(index)
            .ok()
            .and_then(|i| LABELS.get(i).copied())
            .unwrap_or(DifficultyLabel::Legendary)
    }
}

/// `1 + floor(score / 5) * 0.2`
#[inline]
pub fn difficulty_tier(score: u32) -> f32 {
    1.0 + (score / POINTS_PER_DIFFICULTY_STEP) as f32 * DIFFICULTY_STEP
}

/// Label for a score
#[inline]
pub fn difficulty_label(score: u32) -> DifficultyLabel {
    DifficultyLabel::for_tier(difficulty_tier(score))
}

/// Gap height for a tier, shrinking to `min_gap`
#[inline]
pub fn gap_height(tier: f32, tuning: &Tuning) -> f32 {
    (tuning.base_gap - (tier - 1.0) * tuning.gap_shrink_per_tier).max(tuning.min_gap)
}

/// Scroll speed for a tier, growing to `max_speed`
#[inline]
pub fn obstacle_speed(tier: f32, tuning: &Tuning) -> f32 {
    (tuning.base_speed + (tier - 1.0) * tuning.speed_gain_per_tier).min(tuning.max_speed)
}

/// Whether a new obstacle is due: none live, or the newest has scrolled far enough
pub fn should_spawn(obstacles: &[Obstacle], tuning: &Tuning) -> bool {
    obstacles
        .last()
        .is_none_or(|newest| newest.x < tuning.world_width - tuning.spawn_spacing)
}

/// Gap center for a uniform sample `t` in `[0, 1)`, keeping the whole gap
/// at least `gap_margin` away from the top and bottom
#[inline]
pub fn gap_center_for(t: f32, gap: f32, tuning: &Tuning) -> f32 {
    let margin = tuning.gap_margin;
    t * (tuning.world_height - gap - 2.0 * margin) + margin + gap / 2.0
}

/// Spawn an obstacle at the right edge if one is due. Returns it if spawned.
pub fn maybe_spawn(session: &mut GameSession) -> Option<Obstacle> {
    if !should_spawn(&session.obstacles, &session.tuning) {
        return None;
    }

    let tier = session.difficulty_tier();
    let gap = gap_height(tier, &session.tuning);
    let speed = obstacle_speed(tier, &session.tuning);
    let t: f32 = session.rng.random();
    let center = gap_center_for(t, gap, &session.tuning);

    let obstacle = Obstacle::new(session.tuning.world_width, center, gap, speed);
    log::debug!(
        "Spawned obstacle: gap {:.0}px at y={:.0}, speed {:.2}",
        gap,
        center,
        speed
    );
    session.obstacles.push(obstacle);
    Some(obstacle)
}
