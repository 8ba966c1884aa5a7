//! Per-frame simulation step and input handling
//!
//! `advance` runs one frame; `handle_boost` applies one boost input. Both
//! mutate the session in place and report what happened as [`SimEvent`]s so
//! the presentation layer never has to diff state.

use super::physics::{self, Collision};
use super::spawner::{self, DifficultyLabel};
use super::state::{GameSession, GameStatus, RunSummary};
use crate::consts::{BOOST_PARTICLES, EXPLOSION_PARTICLES, TRAIL_INTERVAL};

/// Cosmetic particle flavours requested by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Burst behind the ship on each boost
    Boost,
    /// Steady exhaust while flying
    Trail,
    /// Debris when the ship is destroyed
    Explosion,
}

/// Side effects of a frame or an input, for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    /// Session entered a fresh `Waiting` run
    Reset,
    /// First boost of a run, `Waiting -> Playing`
    RunStarted,
    /// A boost impulse was applied
    Boosted,
    ScoreChanged { score: u32 },
    /// Score beat the stored high score; persist this value
    HighScoreChanged { high_score: u32 },
    DifficultyChanged { label: DifficultyLabel },
    ParticlesSpawned {
        kind: ParticleKind,
        x: f32,
        y: f32,
        count: u32,
    },
    /// Run ended against a wall or world edge
    GameOver {
        collision: Collision,
        summary: RunSummary,
    },
}

/// Handle one boost input (key, click or tap)
pub fn handle_boost(session: &mut GameSession) -> Vec<SimEvent> {
    let mut events = Vec::new();

    match session.status {
        GameStatus::Start | GameStatus::GameOver => {
            session.reset();
            log::info!("New run ready (high score {})", session.high_score);
            events.push(SimEvent::Reset);
            events.push(SimEvent::ScoreChanged { score: 0 });
            events.push(SimEvent::DifficultyChanged {
                label: spawner::difficulty_label(0),
            });
        }
        GameStatus::Waiting => {
            session.status = GameStatus::Playing;
            log::info!("Run started");
            events.push(SimEvent::RunStarted);
            boost(session, &mut events);
        }
        GameStatus::Playing => boost(session, &mut events),
    }

    events
}

fn boost(session: &mut GameSession, events: &mut Vec<SimEvent>) {
    physics::apply_boost(&mut session.player, session.tuning.boost_power);
    events.push(SimEvent::Boosted);
    events.push(SimEvent::ParticlesSpawned {
        kind: ParticleKind::Boost,
        x: exhaust_x(session),
        y: session.player.y,
        count: BOOST_PARTICLES,
    });
}

/// Point just behind the ship where exhaust appears
#[inline]
fn exhaust_x(session: &GameSession) -> f32 {
    session.tuning.player_x - session.tuning.player_size / 2.0
}

/// Advance the session by one frame
///
/// Only `Playing` runs physics. Order within a frame: integrate the ship,
/// spawn, scroll, award passes, check collisions, prune off-screen obstacles.
pub fn advance(session: &mut GameSession) -> Vec<SimEvent> {
    session.frame_count += 1;

    if session.status != GameStatus::Playing {
        return Vec::new();
    }

    let mut events = Vec::new();
    let label_before = spawner::difficulty_label(session.score);

    physics::integrate(&mut session.player, session.tuning.gravity);

    if session.frame_count % TRAIL_INTERVAL == 0 {
        events.push(SimEvent::ParticlesSpawned {
            kind: ParticleKind::Trail,
            x: exhaust_x(session),
            y: session.player.y,
            count: 1,
        });
    }

    spawner::maybe_spawn(session);
    physics::scroll_obstacles(&mut session.obstacles);
    award_passes(session, &mut events);

    let label_after = spawner::difficulty_label(session.score);
    if label_after != label_before {
        events.push(SimEvent::DifficultyChanged { label: label_after });
    }

    if let Some(collision) =
        physics::detect_collision(&session.player, &session.obstacles, &session.tuning)
    {
        game_over(session, collision, &mut events);
    }

    physics::prune_obstacles(&mut session.obstacles, session.tuning.obstacle_width);

    events
}

/// Score every obstacle whose trailing edge is now behind the ship, once each
fn award_passes(session: &mut GameSession, events: &mut Vec<SimEvent>) {
    let player_x = session.tuning.player_x;
    let width = session.tuning.obstacle_width;

    for obstacle in session.obstacles.iter_mut() {
        if obstacle.passed || obstacle.trailing_edge(width) >= player_x {
            continue;
        }
        obstacle.passed = true;
        session.score += 1;
        events.push(SimEvent::ScoreChanged {
            score: session.score,
        });

        if session.score > session.high_score {
            session.high_score = session.score;
            events.push(SimEvent::HighScoreChanged {
                high_score: session.high_score,
            });
        }
    }
}

fn game_over(session: &mut GameSession, collision: Collision, events: &mut Vec<SimEvent>) {
    let summary = RunSummary::new(session.score, session.high_score);
    session.status = GameStatus::GameOver;
    session.last_run = Some(summary);

    log::info!(
        "Game over ({:?}): score {}, high score {}{}",
        collision,
        summary.final_score,
        summary.high_score,
        if summary.new_high_score { " - new high score!" } else { "" }
    );

    events.push(SimEvent::ParticlesSpawned {
        kind: ParticleKind::Explosion,
        x: session.tuning.player_x,
        y: session.player.y,
        count: EXPLOSION_PARTICLES,
    });
    events.push(SimEvent::GameOver { collision, summary });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Obstacle, Player};

    fn playing_session() -> GameSession {
        let mut session = GameSession::new(12345, 0);
        handle_boost(&mut session);
        session.status = GameStatus::Playing;
        session
    }

    fn has_game_over(events: &[SimEvent]) -> bool {
        events.iter().any(|e| matches!(e, SimEvent::GameOver { .. }))
    }

    #[test]
    fn test_start_to_waiting_to_playing() {
        let mut session = GameSession::new(12345, 0);
        assert_eq!(session.status, GameStatus::Start);

        let events = handle_boost(&mut session);
        assert_eq!(session.status, GameStatus::Waiting);
        assert_eq!(events[0], SimEvent::Reset);
        // Reset alone does not lift the ship
        assert_eq!(session.player.velocity, 0.0);

        handle_boost(&mut session);
        assert_eq!(session.status, GameStatus::Playing);
    }

    #[test]
    fn test_waiting_is_frozen() {
        let mut session = GameSession::new(12345, 0);
        handle_boost(&mut session);

        for _ in 0..100 {
            assert!(advance(&mut session).is_empty());
        }
        assert_eq!(session.player, Player::new(300.0));
        assert!(session.obstacles.is_empty());
        // Cosmetic clock keeps running
        assert_eq!(session.frame_count, 100);
    }

    #[test]
    fn test_scenario_a_first_boost_starts_and_lifts() {
        let mut session = GameSession::new(1, 0);
        handle_boost(&mut session);
        assert_eq!(session.player, Player { y: 300.0, velocity: 0.0 });

        let events = handle_boost(&mut session);
        assert_eq!(session.status, GameStatus::Playing);
        assert_eq!(session.player.velocity, -8.0);
        assert_eq!(events[0], SimEvent::RunStarted);
        assert!(events.contains(&SimEvent::ParticlesSpawned {
            kind: ParticleKind::Boost,
            x: 105.0,
            y: 300.0,
            count: 5,
        }));
    }

    #[test]
    fn test_every_boost_between_frames_applies() {
        let mut session = playing_session();
        let boosts: usize = (0..3)
            .map(|_| {
                handle_boost(&mut session)
                    .iter()
                    .filter(|e| **e == SimEvent::Boosted)
                    .count()
            })
            .sum();
        assert_eq!(boosts, 3);
        assert_eq!(session.player.velocity, -8.0);
    }

    #[test]
    fn test_scenario_b_pass_scores_once() {
        let mut session = playing_session();
        // Trailing edge at 121, one frame from crossing x = 120
        session.obstacles.push(Obstacle::new(61.0, 300.0, 180.0, 3.0));

        let events = advance(&mut session);
        assert_eq!(session.score, 1);
        assert!(session.obstacles[0].passed);
        assert!(events.contains(&SimEvent::ScoreChanged { score: 1 }));
        assert_eq!(session.status, GameStatus::Playing);

        for _ in 0..5 {
            handle_boost(&mut session);
            advance(&mut session);
        }
        assert_eq!(session.score, 1);
    }

    #[test]
    fn test_scenario_c_ceiling_without_obstacles() {
        let mut session = playing_session();
        session.player = Player { y: 14.0, velocity: 0.0 };

        let events = advance(&mut session);
        assert_eq!(session.status, GameStatus::GameOver);
        assert!(events.contains(&SimEvent::GameOver {
            collision: Collision::Ceiling,
            summary: RunSummary::new(0, 0),
        }));
    }

    #[test]
    fn test_floor_collision() {
        let mut session = playing_session();
        session.player = Player { y: 580.0, velocity: 6.0 };
        advance(&mut session);
        assert_eq!(session.status, GameStatus::GameOver);
    }

    #[test]
    fn test_obstacle_collision_spawns_explosion() {
        let mut session = playing_session();
        // Ship at 300, gap entirely above it
        session.obstacles.push(Obstacle::new(110.0, 150.0, 120.0, 3.0));

        let events = advance(&mut session);
        assert_eq!(session.status, GameStatus::GameOver);
        assert!(events.iter().any(|e| matches!(
            e,
            SimEvent::GameOver {
                collision: Collision::Obstacle(0),
                ..
            }
        )));
        assert!(events.iter().any(|e| matches!(
            e,
            SimEvent::ParticlesSpawned {
                kind: ParticleKind::Explosion,
                count: 30,
                ..
            }
        )));
    }

    #[test]
    fn test_game_over_is_terminal_until_reset() {
        let mut session = playing_session();
        session.player = Player { y: 14.0, velocity: 0.0 };
        advance(&mut session);
        let frozen = session.player;

        for _ in 0..10 {
            assert!(!has_game_over(&advance(&mut session)));
        }
        assert_eq!(session.player, frozen);

        handle_boost(&mut session);
        assert_eq!(session.status, GameStatus::Waiting);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_scenario_d_tier_below_two_is_easy() {
        let mut session = playing_session();
        session.score = 24;
        assert_eq!(session.difficulty_tier(), 1.8);
        assert_eq!(spawner::difficulty_label(session.score), DifficultyLabel::Easy);
    }

    #[test]
    fn test_difficulty_change_event() {
        let mut session = playing_session();
        session.score = 24;
        session.obstacles.push(Obstacle::new(61.0, 300.0, 180.0, 3.0));

        let events = advance(&mut session);
        assert_eq!(session.score, 25);
        assert!(events.contains(&SimEvent::DifficultyChanged {
            label: DifficultyLabel::Normal
        }));
    }

    #[test]
    fn test_scenario_e_tie_counts_as_new_high_score() {
        let mut session = GameSession::new(7, 5);
        handle_boost(&mut session);
        handle_boost(&mut session);
        session.score = 4;
        session.obstacles.push(Obstacle::new(61.0, 300.0, 180.0, 3.0));

        let events = advance(&mut session);
        assert_eq!(session.score, 5);
        // Tying is not beating: nothing to persist
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, SimEvent::HighScoreChanged { .. }))
        );

        session.player = Player { y: 14.0, velocity: 0.0 };
        advance(&mut session);
        let summary = session.last_run.expect("run finished");
        assert!(summary.new_high_score);
        assert_eq!(session.high_score, 5);
    }

    #[test]
    fn test_scenario_e_lower_score_keeps_high_score() {
        let mut session = GameSession::new(7, 5);
        handle_boost(&mut session);
        handle_boost(&mut session);
        session.score = 3;
        session.player = Player { y: 14.0, velocity: 0.0 };

        advance(&mut session);
        let summary = session.last_run.expect("run finished");
        assert!(!summary.new_high_score);
        assert_eq!(summary.final_score, 3);
        assert_eq!(session.high_score, 5);
    }

    #[test]
    fn test_beating_high_score_emits_change() {
        let mut session = GameSession::new(7, 2);
        handle_boost(&mut session);
        handle_boost(&mut session);
        session.score = 2;
        session.obstacles.push(Obstacle::new(61.0, 300.0, 180.0, 3.0));

        let events = advance(&mut session);
        assert_eq!(session.high_score, 3);
        assert!(events.contains(&SimEvent::HighScoreChanged { high_score: 3 }));
    }

    #[test]
    fn test_trail_every_other_frame() {
        let mut session = playing_session();
        let trails: usize = (0..10)
            .map(|_| {
                advance(&mut session)
                    .iter()
                    .filter(|e| {
                        matches!(
                            e,
                            SimEvent::ParticlesSpawned {
                                kind: ParticleKind::Trail,
                                ..
                            }
                        )
                    })
                    .count()
            })
            .sum();
        assert_eq!(trails, 5);
    }

    #[test]
    fn test_first_playing_frame_spawns_and_scrolls() {
        let mut session = playing_session();
        advance(&mut session);
        assert_eq!(session.obstacles.len(), 1);
        assert_eq!(session.obstacles[0].x, 797.0);
    }

    #[test]
    fn test_off_screen_obstacles_pruned() {
        let mut session = playing_session();
        session.obstacles.push(Obstacle {
            passed: true,
            ..Obstacle::new(-58.0, 300.0, 180.0, 3.0)
        });
        advance(&mut session);
        assert!(session.obstacles.iter().all(|o| o.x > 0.0));
    }

    #[test]
    fn test_spawned_speed_is_not_retroactive() {
        let mut session = playing_session();
        advance(&mut session);
        let first_speed = session.obstacles[0].speed;

        session.score = 100;
        advance(&mut session);
        assert_eq!(session.obstacles[0].speed, first_speed);
        assert_eq!(session.obstacles[0].x, 800.0 - 2.0 * first_speed);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameSession::new(99999, 0);
        let mut b = GameSession::new(99999, 0);

        for frame in 0..600 {
            if frame % 25 == 0 {
                handle_boost(&mut a);
                handle_boost(&mut b);
            }
            assert_eq!(advance(&mut a), advance(&mut b));
        }

        assert_eq!(a.player, b.player);
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.score, b.score);
    }
}
