//! Presentation adapter
//!
//! [`Game`] owns a [`GameSession`] plus everything around it that is not
//! gameplay: particles, stars, settings and the high score store. Platform
//! front ends call [`Game::boost`] for each input and [`Game::frame`] once per
//! display frame, then draw [`Game::snapshot`].

use glam::Vec2;

use crate::fx::{ParticleSystem, Starfield};
use crate::highscores::HighScoreGateway;
use crate::persistence::HighScoreStore;
use crate::render::RenderSnapshot;
use crate::settings::Settings;
use crate::sim::{self, GameSession, SimEvent, Tuning};

/// Game instance holding all state
pub struct Game<S: HighScoreStore> {
    pub session: GameSession,
    pub particles: ParticleSystem,
    pub stars: Starfield,
    settings: Settings,
    scores: HighScoreGateway<S>,
}

impl<S: HighScoreStore> Game<S> {
    pub fn new(seed: u64, store: S, settings: Settings) -> Self {
        Self::with_tuning(seed, store, settings, Tuning::default())
    }

    pub fn with_tuning(seed: u64, store: S, settings: Settings, tuning: Tuning) -> Self {
        let scores = HighScoreGateway::load(store);
        let bounds = Vec2::new(tuning.world_width, tuning.world_height);
        let session = GameSession::with_tuning(seed, scores.high_score(), tuning);
        log::info!("Game initialized with seed: {}", seed);

        Self {
            session,
            particles: ParticleSystem::new(seed, settings.max_particles()),
            stars: Starfield::new(seed, bounds, settings.quality.star_count()),
            settings,
            scores,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.particles.set_max_particles(settings.max_particles());
        if settings.quality.star_count() != self.stars.stars.len() {
            self.stars.reseed(settings.quality.star_count());
        }
        self.settings = settings;
    }

    pub fn scores(&self) -> &HighScoreGateway<S> {
        &self.scores
    }

    /// One boost input
    pub fn boost(&mut self) -> Vec<SimEvent> {
        let events = sim::handle_boost(&mut self.session);
        self.dispatch(&events);
        events
    }

    /// One display frame: scroll the background, step the simulation, age particles
    pub fn frame(&mut self) -> Vec<SimEvent> {
        self.stars.update();
        let events = sim::advance(&mut self.session);
        self.dispatch(&events);
        self.particles.update();
        events
    }

    fn dispatch(&mut self, events: &[SimEvent]) {
        for event in events {
            self.scores.observe(event);
            match *event {
                SimEvent::Reset => {
                    self.particles.clear();
                    self.stars.reseed(self.settings.quality.star_count());
                }
                SimEvent::ParticlesSpawned { kind, x, y, count } => {
                    self.particles.spawn(kind, Vec2::new(x, y), count);
                }
                SimEvent::HighScoreChanged { high_score } => {
                    log::info!("New high score: {}", high_score);
                }
                _ => {}
            }
        }
    }

    /// Borrowed view of the current frame for a render sink
    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        let session = &self.session;
        RenderSnapshot {
            tuning: &session.tuning,
            status: session.status,
            player: session.player,
            obstacles: &session.obstacles,
            particles: &self.particles.particles,
            stars: &self.stars.stars,
            score: session.score,
            high_score: session.high_score,
            difficulty: sim::difficulty_label(session.score),
            last_run: session.last_run,
            frame: session.frame_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::sim::{GameStatus, Obstacle, Player, autopilot};

    fn game(store: MemoryStore) -> Game<MemoryStore> {
        Game::new(77, store, Settings::default())
    }

    #[test]
    fn test_loads_high_score_from_store() {
        let game = game(MemoryStore::with_raw("12"));
        assert_eq!(game.session.high_score, 12);
        assert_eq!(game.snapshot().high_score, 12);
    }

    #[test]
    fn test_corrupt_store_starts_at_zero() {
        let game = game(MemoryStore::with_raw("NaN"));
        assert_eq!(game.session.high_score, 0);
    }

    #[test]
    fn test_boost_spawns_particles() {
        let mut game = game(MemoryStore::new());
        game.boost();
        assert!(game.particles.is_empty());
        game.boost();
        assert_eq!(game.particles.len(), 5);
    }

    #[test]
    fn test_stars_scroll_while_frozen() {
        let mut game = game(MemoryStore::new());
        let before = game.stars.stars.clone();
        game.frame();
        assert_eq!(game.session.status, GameStatus::Start);
        assert_ne!(game.stars.stars, before);
    }

    #[test]
    fn test_new_high_score_is_persisted() {
        let mut game = game(MemoryStore::with_raw("2"));
        game.boost();
        game.boost();
        game.session.score = 2;
        game.session.obstacles.push(Obstacle::new(61.0, 300.0, 180.0, 3.0));

        game.frame();
        assert_eq!(game.session.high_score, 3);
        assert_eq!(game.scores().store().raw(), Some("3"));
        assert_eq!(game.scores().high_score(), 3);
    }

    #[test]
    fn test_crash_explodes_and_reset_clears() {
        let mut game = game(MemoryStore::new());
        game.boost();
        game.boost();
        game.session.player = Player { y: 14.0, velocity: 0.0 };

        game.frame();
        assert_eq!(game.session.status, GameStatus::GameOver);
        assert!(game.particles.len() >= 30);
        assert!(!game.snapshot().ship_visible());

        game.boost();
        assert_eq!(game.session.status, GameStatus::Waiting);
        assert!(game.particles.is_empty());
    }

    #[test]
    fn test_particles_disabled_by_settings() {
        let settings = Settings {
            particles: false,
            ..Settings::default()
        };
        let mut game = Game::new(1, MemoryStore::new(), settings);
        game.boost();
        game.boost();
        assert!(game.particles.is_empty());
    }

    #[test]
    fn test_high_score_survives_runs() {
        let mut game = game(MemoryStore::new());
        let mut best = 0;
        for _ in 0..4000 {
            if autopilot::wants_boost(&game.session) || game.session.status == GameStatus::GameOver {
                game.boost();
            }
            for event in game.frame() {
                if let SimEvent::GameOver { summary, .. } = event {
                    best = best.max(summary.final_score);
                }
            }
            // Force a crash now and then so several runs happen
            if game.session.frame_count == 700 {
                game.session.player.y = 1.0;
            }
        }
        let best = best.max(game.session.score);
        assert_eq!(game.session.high_score, best);
        assert_eq!(game.scores().store().load_high_score(), best);
    }
}
