//! Data-driven game balance
//!
//! Physics and scoring constants that the simulation reads every tick.
//! World geometry is fixed and lives in `consts` / `sim::level` instead.

use serde::{Deserialize, Serialize};

/// Balance constants for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player physics ===
    /// Downward acceleration added to vertical velocity every tick
    pub gravity: f32,
    /// Horizontal velocity multiplier applied every tick (< 1)
    pub friction: f32,
    /// Horizontal speed cap for input acceleration
    pub max_speed: f32,
    /// Velocity added per tick while a direction is held
    pub acceleration: f32,
    /// Vertical velocity set on jump (negative is up)
    pub jump_velocity: f32,

    // === Scoring ===
    pub coin_score: u64,
    pub goal_score: u64,

    // === Particle bursts ===
    pub jump_dust_count: usize,
    pub coin_burst_count: usize,
    pub goal_burst_count: usize,
    pub run_dust_count: usize,
    /// Ticks between running dust puffs
    pub run_dust_interval: u64,
    /// Horizontal speed needed before running kicks up dust
    pub run_dust_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            friction: 0.8,
            max_speed: 5.0,
            acceleration: 1.0,
            jump_velocity: -12.0,

            coin_score: 10,
            goal_score: 50,

            jump_dust_count: 8,
            coin_burst_count: 15,
            goal_burst_count: 30,
            run_dust_count: 2,
            run_dust_interval: 10,
            run_dust_speed: 2.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
