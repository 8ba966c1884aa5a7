//! Shape generation for 2D primitives
//!
//! Pure geometry shared by every render sink: ship outline, obstacle walls,
//! background grid and scanlines. Coordinates are world pixels, y down.

use glam::Vec2;

use crate::consts::{GRID_SCROLL_SPEED, GRID_SPACING};
use crate::sim::Obstacle;

/// Maximum ship tilt either way (degrees)
pub const MAX_TILT_DEGREES: f32 = 30.0;
/// Degrees of tilt per pixel/frame of vertical velocity
pub const TILT_PER_VELOCITY: f32 = 3.0;
/// Spacing of the decorative stripes on obstacle walls
pub const STRIPE_SPACING: f32 = 20.0;
/// Period of the scanline overlay
pub const SCANLINE_PERIOD: f32 = 4.0;

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: &str = "#050510";
    pub const SHIP: &str = "#00ffff";
    pub const SHIP_CORE: &str = "#ffffff";
    pub const ENGINE: &str = "#ff00ff";
    pub const WALL_EDGE: &str = "#ff0066";
    pub const WALL_CENTER: &str = "#ff00ff";
    pub const WALL_GLOW: &str = "#ffffff";
    pub const WALL_STRIPE: &str = "rgba(255, 255, 255, 0.3)";
    pub const GRID: &str = "rgba(0, 255, 255, 0.05)";
    pub const SCANLINE: &str = "rgba(0, 0, 0, 0.03)";
    pub const HINT: &str = "rgba(0, 255, 255, 0.8)";
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Ship rotation for a velocity, in radians (nose up when climbing)
pub fn ship_tilt(velocity: f32) -> f32 {
    (velocity * TILT_PER_VELOCITY)
        .clamp(-MAX_TILT_DEGREES, MAX_TILT_DEGREES)
        .to_radians()
}

/// Engine flare shows only while climbing
#[inline]
pub fn engine_lit(velocity: f32) -> bool {
    velocity < 0.0
}

/// Arrowhead hull around the origin, pointing +x
pub fn ship_hull(size: f32) -> [Vec2; 4] {
    [
        Vec2::new(size / 2.0 + 5.0, 0.0),
        Vec2::new(-size / 2.0, -size / 3.0),
        Vec2::new(-size / 3.0, 0.0),
        Vec2::new(-size / 2.0, size / 3.0),
    ]
}

/// Inner highlight, the hull at half scale without the nose extension
pub fn ship_core(size: f32) -> [Vec2; 4] {
    [
        Vec2::new(size / 4.0, 0.0),
        Vec2::new(-size / 4.0, -size / 6.0),
        Vec2::new(-size / 6.0, 0.0),
        Vec2::new(-size / 4.0, size / 6.0),
    ]
}

/// Rotate and translate local outline points into world space
pub fn place(points: &[Vec2], center: Vec2, angle: f32) -> Vec<Vec2> {
    let rotation = Vec2::from_angle(angle);
    points.iter().map(|p| center + rotation.rotate(*p)).collect()
}

/// Upper and lower wall of an obstacle
pub fn obstacle_walls(obstacle: &Obstacle, width: f32, world_height: f32) -> (Rect, Rect) {
    let top = Rect::new(obstacle.x, 0.0, width, obstacle.gap_top());
    let bottom_y = obstacle.gap_bottom();
    let bottom = Rect::new(obstacle.x, bottom_y, width, world_height - bottom_y);
    (top, bottom)
}

/// Heights of the decorative stripes across both walls
pub fn obstacle_stripes(obstacle: &Obstacle, world_height: f32) -> Vec<f32> {
    let mut stripes = Vec::new();

    let mut y = 0.0;
    while y < obstacle.gap_top() {
        stripes.push(y);
        y += STRIPE_SPACING;
    }

    let mut y = obstacle.gap_bottom() + STRIPE_SPACING;
    while y < world_height {
        stripes.push(y);
        y += STRIPE_SPACING;
    }

    stripes
}

/// Scroll offset of the vertical grid lines for a frame
#[inline]
pub fn grid_offset(frame: u64) -> f32 {
    ((frame * GRID_SCROLL_SPEED) % GRID_SPACING as u64) as f32
}

/// X positions of the vertical grid lines
pub fn grid_columns(frame: u64, world_width: f32) -> Vec<f32> {
    let mut columns = Vec::new();
    let mut x = -grid_offset(frame);
    while x < world_width {
        columns.push(x);
        x += GRID_SPACING;
    }
    columns
}

/// Y positions of the horizontal grid lines
pub fn grid_rows(world_height: f32) -> Vec<f32> {
    let mut rows = Vec::new();
    let mut y = 0.0;
    while y < world_height {
        rows.push(y);
        y += GRID_SPACING;
    }
    rows
}

/// Y positions of the dark scanline bands
pub fn scanline_rows(world_height: f32) -> impl Iterator<Item = f32> {
    let count = (world_height / SCANLINE_PERIOD).ceil() as u32;
    (0..count).map(|i| i as f32 * SCANLINE_PERIOD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ship_tilt_clamps() {
        assert_eq!(ship_tilt(0.0), 0.0);
        assert!((ship_tilt(5.0) - 15f32.to_radians()).abs() < 1e-6);
        assert!((ship_tilt(-20.0) + 30f32.to_radians()).abs() < 1e-6);
        assert!((ship_tilt(50.0) - 30f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_engine_lit_only_when_climbing() {
        assert!(engine_lit(-8.0));
        assert!(!engine_lit(0.0));
        assert!(!engine_lit(3.0));
    }

    #[test]
    fn test_place_without_rotation_translates() {
        let hull = ship_hull(30.0);
        let placed = place(&hull, Vec2::new(120.0, 300.0), 0.0);
        assert_eq!(placed[0], Vec2::new(140.0, 300.0));
        assert_eq!(placed[1], Vec2::new(105.0, 290.0));
    }

    #[test]
    fn test_place_quarter_turn() {
        let placed = place(&[Vec2::new(10.0, 0.0)], Vec2::ZERO, std::f32::consts::FRAC_PI_2);
        assert!((placed[0] - Vec2::new(0.0, 10.0)).length() < 1e-5);
    }

    #[test]
    fn test_obstacle_walls() {
        let obstacle = Obstacle::new(400.0, 300.0, 180.0, 3.0);
        let (top, bottom) = obstacle_walls(&obstacle, 60.0, 600.0);
        assert_eq!(top, Rect::new(400.0, 0.0, 60.0, 210.0));
        assert_eq!(bottom, Rect::new(400.0, 390.0, 60.0, 210.0));
    }

    #[test]
    fn test_obstacle_stripes() {
        let obstacle = Obstacle::new(400.0, 300.0, 180.0, 3.0);
        let stripes = obstacle_stripes(&obstacle, 600.0);
        // 0..=200 above the gap, 410..=590 below it
        assert_eq!(stripes.first(), Some(&0.0));
        assert!(stripes.contains(&200.0));
        assert!(!stripes.contains(&390.0));
        assert!(stripes.contains(&410.0));
        assert_eq!(stripes.last(), Some(&590.0));
        assert_eq!(stripes.len(), 11 + 10);
    }

    #[test]
    fn test_grid_scrolls_and_wraps() {
        assert_eq!(grid_offset(0), 0.0);
        assert_eq!(grid_offset(10), 20.0);
        assert_eq!(grid_offset(25), 0.0);

        let columns = grid_columns(10, 800.0);
        assert_eq!(columns[0], -20.0);
        assert_eq!(columns.len(), 17);
        assert_eq!(grid_rows(600.0).len(), 12);
    }

    #[test]
    fn test_scanlines_cover_world() {
        let rows: Vec<f32> = scanline_rows(600.0).collect();
        assert_eq!(rows.len(), 150);
        assert_eq!(rows[1], 4.0);
    }
}
