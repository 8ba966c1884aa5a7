//! Cosmetic effects: particles and the scrolling starfield
//!
//! Nothing here affects gameplay. Effects draw from their own RNG stream so
//! they never shift the simulation's obstacle layout.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::ParticleKind;

/// Stream offset that keeps effect randomness apart from the simulation's
const FX_STREAM: u64 = 0x6e65_6f6e;

const BOOST_COLORS: [&str; 3] = ["#00ffff", "#00ccff", "#0099ff"];
const TRAIL_COLORS: [&str; 3] = ["#ff00ff", "#cc00ff", "#ff0099"];
const EXPLOSION_COLORS: [&str; 3] = ["#ffff00", "#ff9900", "#ff0066"];

impl ParticleKind {
    fn palette(self) -> &'static [&'static str; 3] {
        match self {
            ParticleKind::Boost => &BOOST_COLORS,
            ParticleKind::Trail => &TRAIL_COLORS,
            ParticleKind::Explosion => &EXPLOSION_COLORS,
        }
    }

    /// Frames a particle of this kind lives
    pub fn lifetime(self) -> u32 {
        match self {
            ParticleKind::Explosion => 40,
            _ => 20,
        }
    }

    /// Horizontal and vertical velocity spread
    fn spread(self) -> Vec2 {
        match self {
            ParticleKind::Explosion => Vec2::new(8.0, 8.0),
            _ => Vec2::new(3.0, 2.0),
        }
    }

    fn max_extra_size(self) -> f32 {
        match self {
            ParticleKind::Explosion => 6.0,
            _ => 4.0,
        }
    }
}

/// A particle for visual effects
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Frames remaining
    pub life: u32,
    pub max_life: u32,
    pub size: f32,
    /// CSS color
    pub color: &'static str,
}

impl Particle {
    /// Fade factor, 1.0 when fresh and 0.0 when spent
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.life as f32 / self.max_life as f32
    }
}

/// Owns all live particles and caps their number
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    pub particles: Vec<Particle>,
    max_particles: usize,
    rng: Pcg32,
}

impl ParticleSystem {
    pub fn new(seed: u64, max_particles: usize) -> Self {
        Self {
            particles: Vec::new(),
            max_particles,
            rng: Pcg32::seed_from_u64(seed ^ FX_STREAM),
        }
    }

    pub fn set_max_particles(&mut self, max_particles: usize) {
        self.max_particles = max_particles;
        self.particles.truncate(max_particles);
    }

    /// Emit `count` particles of a kind at a point; drops what exceeds the cap
    pub fn spawn(&mut self, kind: ParticleKind, origin: Vec2, count: u32) {
        let room = self.max_particles.saturating_sub(self.particles.len());
        let count = (count as usize).min(room);
        let spread = kind.spread();
        let palette = kind.palette();
        let life = kind.lifetime();

        for _ in 0..count {
            let vx = (self.rng.random::<f32>() - 0.5) * spread.x - 2.0;
            let vy = (self.rng.random::<f32>() - 0.5) * spread.y;
            let size = self.rng.random::<f32>() * kind.max_extra_size() + 2.0;
            let color = palette[self.rng.random_range(0..palette.len())];
            self.particles.push(Particle {
                pos: origin,
                vel: Vec2::new(vx, vy),
                life,
                max_life: life,
                size,
                color,
            });
        }
    }

    /// Move every particle one frame and drop the spent ones
    pub fn update(&mut self) {
        for particle in self.particles.iter_mut() {
            particle.pos += particle.vel;
            particle.life = particle.life.saturating_sub(1);
        }
        self.particles.retain(|p| p.life > 0);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// A background star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub brightness: f32,
}

/// Parallax starfield that scrolls left in every game status
#[derive(Debug, Clone)]
pub struct Starfield {
    pub stars: Vec<Star>,
    bounds: Vec2,
    rng: Pcg32,
}

impl Starfield {
    pub fn new(seed: u64, bounds: Vec2, count: usize) -> Self {
        let mut field = Self {
            stars: Vec::with_capacity(count),
            bounds,
            rng: Pcg32::seed_from_u64(seed.wrapping_add(FX_STREAM)),
        };
        field.reseed(count);
        field
    }

    /// Scatter a fresh set of stars
    pub fn reseed(&mut self, count: usize) {
        self.stars.clear();
        for _ in 0..count {
            let star = Star {
                pos: Vec2::new(
                    self.rng.random::<f32>() * self.bounds.x,
                    self.rng.random::<f32>() * self.bounds.y,
                ),
                size: self.rng.random::<f32>() * 2.0 + 0.5,
                speed: self.rng.random::<f32>() + 0.5,
                brightness: self.rng.random::<f32>() * 0.5 + 0.5,
            };
            self.stars.push(star);
        }
    }

    /// Scroll one frame; stars leaving the left edge wrap to the right at a new height
    pub fn update(&mut self) {
        for star in self.stars.iter_mut() {
            star.pos.x -= star.speed;
            if star.pos.x < 0.0 {
                star.pos.x = self.bounds.x;
                star.pos.y = self.rng.random::<f32>() * self.bounds.y;
            }
        }
    }
}
