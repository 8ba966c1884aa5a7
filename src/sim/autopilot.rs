//! Demo pilot that flies the ship on its own
//!
//! Aims for the center of the next gap the ship has not cleared yet and
//! boosts whenever the ship sinks too far below it. Used by the native demo
//! binary and by long-running tests.

use super::state::{GameSession, GameStatus};

/// How far below the target line the ship may sink before boosting
pub const BOOST_SLACK: f32 = 40.0;

/// Height the pilot is currently steering toward
pub fn target_y(session: &GameSession) -> f32 {
    let tuning = &session.tuning;
    let ship_left = tuning.player_x - tuning.player_radius();

    session
        .obstacles
        .iter()
        .find(|o| o.trailing_edge(tuning.obstacle_width) >= ship_left)
        .map(|o| o.gap_center_y)
        .unwrap_or_else(|| tuning.spawn_y())
}

/// Whether the pilot wants to press boost this frame
pub fn wants_boost(session: &GameSession) -> bool {
    match session.status {
        // Start a run from any idle screen
        GameStatus::Start | GameStatus::Waiting => true,
        GameStatus::Playing => session.player.y > target_y(session) + BOOST_SLACK,
        GameStatus::GameOver => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Obstacle, Player};
    use crate::sim::tick::{advance, handle_boost};

    #[test]
    fn test_targets_next_uncleared_gap() {
        let mut session = GameSession::new(3, 0);
        assert_eq!(target_y(&session), 300.0);

        // First obstacle is fully behind the ship, second is ahead
        session.obstacles.push(Obstacle::new(30.0, 150.0, 180.0, 3.0));
        session.obstacles.push(Obstacle::new(400.0, 420.0, 180.0, 3.0));
        assert_eq!(target_y(&session), 420.0);
    }

    #[test]
    fn test_boost_decision() {
        let mut session = GameSession::new(3, 0);
        assert!(wants_boost(&session));

        session.status = GameStatus::Playing;
        session.player = Player::new(341.0);
        assert!(wants_boost(&session));
        session.player = Player::new(340.0);
        assert!(!wants_boost(&session));

        session.status = GameStatus::GameOver;
        assert!(!wants_boost(&session));
    }

    #[test]
    fn test_autopilot_clears_obstacles() {
        let mut session = GameSession::new(2024, 0);

        for _ in 0..2500 {
            if wants_boost(&session) {
                handle_boost(&mut session);
            }
            advance(&mut session);
            if session.status == GameStatus::GameOver {
                break;
            }
        }

        assert!(session.score >= 5, "autopilot only scored {}", session.score);
    }
}
