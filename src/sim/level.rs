//! Level layout and the level state machine
//!
//! Every level uses the same fixed screen. Completing it and pressing reset
//! moves on to the next level number with a fresh set of coins.

use glam::Vec2;
use serde::Serialize;

use super::geometry::Rect;
use super::state::{Cloud, Coin, GameEvent, GameState, Platform};
use crate::consts::*;

/// Where the player stands at the start of every level
pub const PLAYER_START: Vec2 = Vec2::new(PLAYER_START_X, PLAYER_START_Y);

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Player in control, physics and collisions active
    Running,
    /// Goal reached; the player is frozen until reset
    LevelComplete,
}

/// Static platforms, ground first
pub fn platforms() -> Vec<Platform> {
    [
        Rect::new(0.0, 350.0, WORLD_WIDTH, 50.0),
        Rect::new(200.0, 250.0, 100.0, 20.0),
        Rect::new(400.0, 200.0, 100.0, 20.0),
        Rect::new(600.0, 250.0, 100.0, 20.0),
    ]
    .into_iter()
    .map(|rect| Platform { rect })
    .collect()
}

/// A fresh, uncollected set of coins
pub fn coins() -> Vec<Coin> {
    [
        (250.0, 220.0),
        (450.0, 170.0),
        (650.0, 220.0),
        (350.0, 300.0),
        (550.0, 300.0),
    ]
    .into_iter()
    .map(|(x, y)| Coin::new(x, y))
    .collect()
}

pub fn clouds() -> Vec<Cloud> {
    [
        Rect::new(50.0, 50.0, 80.0, 40.0),
        Rect::new(200.0, 30.0, 100.0, 50.0),
        Rect::new(400.0, 70.0, 90.0, 45.0),
        Rect::new(600.0, 40.0, 110.0, 55.0),
    ]
    .into_iter()
    .map(|rect| Cloud { rect })
    .collect()
}

impl GameState {
    /// Handle a reset request
    ///
    /// After a completed level this advances to the next one; mid-level it
    /// restarts the current one. Score is kept either way.
    pub fn reset(&mut self) -> GameEvent {
        self.player.respawn();
        self.coins = coins();

        match self.phase {
            GamePhase::LevelComplete => {
                self.level += 1;
                self.phase = GamePhase::Running;
                self.particles.clear();
                log::info!("Level {} start (score {})", self.level, self.score);
                GameEvent::LevelAdvanced { level: self.level }
            }
            GamePhase::Running => {
                log::info!("Level {} restarted", self.level);
                GameEvent::LevelRestarted { level: self.level }
            }
        }
    }

    /// Enter the level-complete phase. Returns false if already complete.
    pub(crate) fn complete_level(&mut self) -> bool {
        if self.phase == GamePhase::LevelComplete {
            return false;
        }
        self.phase = GamePhase::LevelComplete;
        self.score += self.tuning.goal_score;
        log::info!("Level {} complete! Score: {}", self.level, self.score);
        true
    }
}
