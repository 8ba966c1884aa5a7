//! Canvas 2D renderer for the browser build
//!
//! Paints a [`RenderSnapshot`] with `CanvasRenderingContext2d`. Geometry comes
//! from [`super::shapes`]; this file only knows how to stroke and fill it.

use std::f64::consts::TAU;

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::shapes::{self, colors};
use super::{RenderSink, RenderSnapshot};
use crate::settings::Settings;
use crate::sim::{GameStatus, Obstacle};

const WAITING_HINT: &str = "PRESS SPACE OR CLICK TO START";

/// Draws snapshots onto a 2D canvas context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    settings: Settings,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, settings: Settings) -> Self {
        Self { ctx, settings }
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    fn clear(&self, width: f64, height: f64) {
        self.ctx.set_fill_style_str(colors::BACKGROUND);
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn circle(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn polygon(&self, points: &[Vec2]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn line(&self, from: Vec2, to: Vec2) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn draw_stars(&self, snapshot: &RenderSnapshot<'_>) {
        for star in snapshot.stars {
            self.ctx
                .set_fill_style_str(&format!("rgba(255, 255, 255, {})", star.brightness));
            self.circle(star.pos, star.size);
        }
    }

    fn draw_grid(&self, snapshot: &RenderSnapshot<'_>) {
        let w = snapshot.tuning.world_width;
        let h = snapshot.tuning.world_height;
        self.ctx.set_stroke_style_str(colors::GRID);
        self.ctx.set_line_width(1.0);
        for x in shapes::grid_columns(snapshot.frame, w) {
            self.line(Vec2::new(x, 0.0), Vec2::new(x, h));
        }
        for y in shapes::grid_rows(h) {
            self.line(Vec2::new(0.0, y), Vec2::new(w, y));
        }
    }

    fn draw_particles(&self, snapshot: &RenderSnapshot<'_>) {
        for particle in snapshot.particles {
            let alpha = particle.alpha();
            self.ctx.set_fill_style_str(particle.color);
            self.ctx.set_global_alpha(alpha as f64);
            self.ctx.set_shadow_color(particle.color);
            self.ctx.set_shadow_blur(10.0);
            self.circle(particle.pos, particle.size * alpha);
        }
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_shadow_blur(0.0);
    }

    fn draw_obstacle(&self, obstacle: &Obstacle, snapshot: &RenderSnapshot<'_>) {
        let width = snapshot.tuning.obstacle_width;
        let height = snapshot.tuning.world_height;
        let (top, bottom) = shapes::obstacle_walls(obstacle, width, height);

        let gradient = self.ctx.create_linear_gradient(
            obstacle.x as f64,
            0.0,
            (obstacle.x + width) as f64,
            0.0,
        );
        let _ = gradient.add_color_stop(0.0, colors::WALL_EDGE);
        let _ = gradient.add_color_stop(0.5, colors::WALL_CENTER);
        let _ = gradient.add_color_stop(1.0, colors::WALL_EDGE);

        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.set_shadow_color(colors::WALL_CENTER);
        self.ctx.set_shadow_blur(20.0);
        for wall in [top, bottom] {
            self.ctx
                .fill_rect(wall.x as f64, wall.y as f64, wall.w as f64, wall.h as f64);
        }

        // Glowing lips around the gap
        self.ctx.set_stroke_style_str(colors::WALL_GLOW);
        self.ctx.set_line_width(2.0);
        self.ctx.set_shadow_blur(30.0);
        for edge in [obstacle.gap_top(), obstacle.gap_bottom()] {
            self.line(Vec2::new(obstacle.x, edge), Vec2::new(obstacle.x + width, edge));
        }

        self.ctx.set_stroke_style_str(colors::WALL_STRIPE);
        self.ctx.set_line_width(1.0);
        self.ctx.set_shadow_blur(0.0);
        for y in shapes::obstacle_stripes(obstacle, height) {
            self.line(
                Vec2::new(obstacle.x + 10.0, y),
                Vec2::new(obstacle.x + width - 10.0, y),
            );
        }
    }

    fn draw_ship(&self, snapshot: &RenderSnapshot<'_>) {
        let size = snapshot.tuning.player_size;
        let center = Vec2::new(snapshot.tuning.player_x, snapshot.player.y);
        let velocity = snapshot.player.velocity;
        let tilt = if self.settings.ship_tilt() {
            shapes::ship_tilt(velocity)
        } else {
            0.0
        };

        // Halo
        if let Ok(halo) = self.ctx.create_radial_gradient(
            center.x as f64,
            center.y as f64,
            0.0,
            center.x as f64,
            center.y as f64,
            size as f64,
        ) {
            let _ = halo.add_color_stop(0.0, "rgba(0, 255, 255, 0.8)");
            let _ = halo.add_color_stop(0.5, "rgba(0, 255, 255, 0.3)");
            let _ = halo.add_color_stop(1.0, "rgba(0, 255, 255, 0)");
            self.ctx.set_fill_style_canvas_gradient(&halo);
            self.circle(center, size);
        }

        self.ctx.set_fill_style_str(colors::SHIP);
        self.ctx.set_shadow_color(colors::SHIP);
        self.ctx.set_shadow_blur(20.0);
        self.polygon(&shapes::place(&shapes::ship_hull(size), center, tilt));

        self.ctx.set_fill_style_str(colors::SHIP_CORE);
        self.ctx.set_shadow_blur(10.0);
        self.polygon(&shapes::place(&shapes::ship_core(size), center, tilt));

        if shapes::engine_lit(velocity) {
            let flare = shapes::place(&[Vec2::new(-size / 2.0 - 10.0, 0.0)], center, tilt);
            self.ctx.set_fill_style_str(colors::ENGINE);
            self.ctx.set_shadow_color(colors::ENGINE);
            self.ctx.set_shadow_blur(30.0);
            self.circle(flare[0], 15.0);
        }
        self.ctx.set_shadow_blur(0.0);
    }

    fn draw_waiting_hint(&self, snapshot: &RenderSnapshot<'_>) {
        self.ctx.set_fill_style_str(colors::HINT);
        self.ctx.set_font("20px Orbitron, sans-serif");
        self.ctx.set_text_align("center");
        self.ctx.set_shadow_color(colors::SHIP);
        self.ctx.set_shadow_blur(15.0);
        let _ = self.ctx.fill_text(
            WAITING_HINT,
            (snapshot.tuning.world_width / 2.0) as f64,
            (snapshot.tuning.world_height - 50.0) as f64,
        );
        self.ctx.set_shadow_blur(0.0);
    }

    fn draw_scanlines(&self, snapshot: &RenderSnapshot<'_>) {
        let w = snapshot.tuning.world_width as f64;
        self.ctx.set_fill_style_str(colors::SCANLINE);
        for y in shapes::scanline_rows(snapshot.tuning.world_height) {
            self.ctx.fill_rect(0.0, y as f64, w, 2.0);
        }
    }
}

impl RenderSink for CanvasRenderer {
    fn draw(&mut self, snapshot: &RenderSnapshot<'_>) {
        self.clear(
            snapshot.tuning.world_width as f64,
            snapshot.tuning.world_height as f64,
        );
        self.draw_stars(snapshot);
        if self.settings.grid {
            self.draw_grid(snapshot);
        }
        self.draw_particles(snapshot);
        for obstacle in snapshot.obstacles {
            self.draw_obstacle(obstacle, snapshot);
        }
        if snapshot.ship_visible() {
            self.draw_ship(snapshot);
        }
        if snapshot.status == GameStatus::Waiting {
            self.draw_waiting_hint(snapshot);
        }
        if self.settings.effective_scanlines() {
            self.draw_scanlines(snapshot);
        }
    }
}
