//! Game state and core simulation types
//!
//! Everything the render loop needs to draw a frame lives in `GameState`.

use glam::Vec2;
use serde::Serialize;

use super::geometry::Rect;
use super::level::{self, GamePhase};
use super::particles::ParticleField;
use crate::consts::*;
use crate::tuning::Tuning;

/// Which way the stick figure is facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Animation pose, derived from movement each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnimState {
    Idle,
    Run,
    Jump,
}

/// The player's stick figure
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    /// In the air after a jump, cleared on landing
    pub jumping: bool,
    /// Standing on a platform this tick
    pub grounded: bool,
    pub facing: Facing,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: level::PLAYER_START,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vel: Vec2::ZERO,
            jumping: false,
            grounded: false,
            facing: Facing::Right,
        }
    }
}

impl Player {
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Point under the player's feet (dust spawns here)
    #[inline]
    pub fn feet(&self) -> Vec2 {
        self.bounds().bottom_center()
    }

    pub fn anim_state(&self) -> AnimState {
        if self.jumping {
            AnimState::Jump
        } else if self.vel.x.abs() > RUN_ANIM_THRESHOLD {
            AnimState::Run
        } else {
            AnimState::Idle
        }
    }

    /// Put the player back at the level start, motionless
    pub fn respawn(&mut self) {
        self.pos = level::PLAYER_START;
        self.vel = Vec2::ZERO;
    }
}

/// A static platform
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Platform {
    pub rect: Rect,
}

/// A spinning coin
#[derive(Debug, Clone, Serialize)]
pub struct Coin {
    pub rect: Rect,
    /// Once set, never cleared for this coin
    pub collected: bool,
    /// Spin angle (radians, cosmetic)
    pub rotation: f32,
}

impl Coin {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, COIN_SIZE, COIN_SIZE),
            collected: false,
            rotation: 0.0,
        }
    }
}

/// The level's goal flag
#[derive(Debug, Clone, Serialize)]
pub struct Goal {
    pub rect: Rect,
    /// Flag wave phase in [0, 2π) (cosmetic)
    pub waving: f32,
}

impl Default for Goal {
    fn default() -> Self {
        Self {
            rect: Rect::new(GOAL_X, GOAL_Y, GOAL_WIDTH, GOAL_HEIGHT),
            waving: 0.0,
        }
    }
}

impl Goal {
    pub fn wave(&mut self) {
        self.waving = (self.waving + GOAL_WAVE_RATE) % std::f32::consts::TAU;
    }
}

/// A background cloud drifting left
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Cloud {
    pub rect: Rect,
}

impl Cloud {
    /// Drift left, wrapping back to the right edge once fully off-screen
    pub fn drift(&mut self) {
        self.rect.x -= CLOUD_DRIFT;
        if self.rect.x + self.rect.width < 0.0 {
            self.rect.x = WORLD_WIDTH;
        }
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    /// Player left the ground
    Jumped { feet: Vec2 },
    /// Player is running fast enough to kick up dust
    RunDust { feet: Vec2 },
    /// Coin at `index` picked up
    CoinCollected { index: usize, center: Vec2 },
    /// Goal flag touched, level complete
    GoalReached { center: Vec2 },
    /// Reset after completing a level
    LevelAdvanced { level: u32 },
    /// Reset mid-level
    LevelRestarted { level: u32 },
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance constants in effect
    pub tuning: Tuning,
    /// Never reset, carries across levels
    pub score: u64,
    /// Current level (1-based)
    pub level: u32,
    pub phase: GamePhase,
    /// Ticks simulated while running (animation timing)
    pub frame_count: u64,
    pub player: Player,
    /// Ground first, then elevated platforms; iteration order matters
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub goal: Goal,
    pub clouds: Vec<Cloud>,
    /// Visual particles (not gameplay-affecting)
    pub particles: ParticleField,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            tuning,
            score: 0,
            level: 1,
            phase: GamePhase::Running,
            frame_count: 0,
            player: Player::default(),
            platforms: level::platforms(),
            coins: level::coins(),
            goal: Goal::default(),
            clouds: level::clouds(),
            particles: ParticleField::new(seed),
        }
    }

    /// Physics and collisions only advance while running
    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    #[inline]
    pub fn goal_reached(&self) -> bool {
        self.phase == GamePhase::LevelComplete
    }

    pub fn coins_remaining(&self) -> usize {
        self.coins.iter().filter(|c| !c.collected).count()
    }
}
