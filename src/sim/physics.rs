//! Ship kinematics and collision detection
//!
//! The world is axis-aligned: the ship is a box of half-width `r` and
//! half-height `r_v` at a fixed x, obstacles are two walls with a gap.
//! All comparisons are strict, so touching an edge exactly is safe.

use super::state::{Obstacle, Player};
use super::tuning::Tuning;

/// What the ship ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Flew off the top of the world
    Ceiling,
    /// Fell off the bottom of the world
    Floor,
    /// Hit the wall of the obstacle at this index
    Obstacle(usize),
}

/// Apply one frame of gravity, then move. Gravity lands before displacement.
#[inline]
pub fn integrate(player: &mut Player, gravity: f32) {
    player.velocity += gravity;
    player.y += player.velocity;
}

/// Boost impulse: velocity is reset, not accumulated
#[inline]
pub fn apply_boost(player: &mut Player, boost_power: f32) {
    player.velocity = boost_power;
}

/// Check the ship against the top and bottom of the world
pub fn check_bounds(player: &Player, tuning: &Tuning) -> Option<Collision> {
    let r = tuning.player_radius();
    if player.y < r {
        Some(Collision::Ceiling)
    } else if player.y > tuning.world_height - r {
        Some(Collision::Floor)
    } else {
        None
    }
}

/// Whether an obstacle's columns overlap the ship horizontally
#[inline]
pub fn overlaps_horizontally(obstacle: &Obstacle, tuning: &Tuning) -> bool {
    let r = tuning.player_radius();
    tuning.player_x + r > obstacle.x
        && tuning.player_x - r < obstacle.trailing_edge(tuning.obstacle_width)
}

/// Whether the ship's vertical extent pokes out of the obstacle's gap
#[inline]
pub fn outside_gap(player: &Player, obstacle: &Obstacle, tuning: &Tuning) -> bool {
    let r_v = tuning.player_vertical_radius();
    player.y - r_v < obstacle.gap_top() || player.y + r_v > obstacle.gap_bottom()
}

/// Check the ship against every live obstacle, first hit wins
pub fn check_obstacles(player: &Player, obstacles: &[Obstacle], tuning: &Tuning) -> Option<Collision> {
    obstacles
        .iter()
        .position(|o| overlaps_horizontally(o, tuning) && outside_gap(player, o, tuning))
        .map(Collision::Obstacle)
}

/// Full collision verdict for a frame: world bounds first, then obstacles
pub fn detect_collision(player: &Player, obstacles: &[Obstacle], tuning: &Tuning) -> Option<Collision> {
    check_bounds(player, tuning).or_else(|| check_obstacles(player, obstacles, tuning))
}

/// Scroll obstacles left by their own speed, in spawn order
pub fn scroll_obstacles(obstacles: &mut [Obstacle]) {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= obstacle.speed;
    }
}

/// Drop obstacles whose trailing edge has left the world
pub fn prune_obstacles(obstacles: &mut Vec<Obstacle>, obstacle_width: f32) {
    obstacles.retain(|o| o.trailing_edge(obstacle_width) > 0.0);
}
