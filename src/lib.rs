//! Stick Dash - A single-screen stick figure platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, level state, particles)
//! - `platform`: Browser keyboard input mapping
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate (one tick per 60 Hz display refresh)
    pub const TICK_HZ: f32 = 60.0;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_HZ;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta fed into the clock (seconds)
    pub const MAX_FRAME_DELTA: f32 = 0.1;

    /// World dimensions (pixels, y grows downward)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 400.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 20.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 300.0;

    /// Coin size (square)
    pub const COIN_SIZE: f32 = 15.0;

    /// Goal flag
    pub const GOAL_X: f32 = 700.0;
    pub const GOAL_Y: f32 = 300.0;
    pub const GOAL_WIDTH: f32 = 30.0;
    pub const GOAL_HEIGHT: f32 = 50.0;

    /// Cosmetic animation rates (per tick)
    pub const COIN_SPIN_RATE: f32 = 0.05;
    pub const GOAL_WAVE_RATE: f32 = 0.1;
    pub const CLOUD_DRIFT: f32 = 0.2;

    /// Horizontal speed above which the player counts as running
    pub const RUN_ANIM_THRESHOLD: f32 = 0.5;
}
