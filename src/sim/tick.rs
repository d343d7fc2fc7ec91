//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::collision::resolve_collisions;
use super::particles::ParticleColor;
use super::physics::{apply_input, integrate, update_facing};
use super::state::{GameEvent, GameState};
use crate::consts::COIN_SPIN_RATE;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Right arrow held
    pub move_right: bool,
    /// Left arrow held
    pub move_left: bool,
    /// Jump key held
    pub jump: bool,
    /// Reset pressed since the last tick (one-shot)
    pub reset: bool,
}

/// Advance the game state by one tick
///
/// Returns the events raised during the tick, in order.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.reset {
        events.push(state.reset());
    }

    for cloud in &mut state.clouds {
        cloud.drift();
    }
    update_facing(&mut state.player, input);

    // Player is frozen once the goal is reached; effects keep animating
    if state.is_running() {
        if let Some(event) = apply_input(&mut state.player, input, &state.tuning) {
            events.push(event);
        }
        integrate(&mut state.player, &state.tuning);

        resolve_collisions(state, &mut events);

        let player = &state.player;
        if player.grounded
            && player.vel.x.abs() > state.tuning.run_dust_speed
            && state.frame_count % state.tuning.run_dust_interval.max(1) == 0
        {
            events.push(GameEvent::RunDust {
                feet: player.feet(),
            });
        }

        state.frame_count += 1;
    }

    for coin in state.coins.iter_mut().filter(|c| !c.collected) {
        coin.rotation += COIN_SPIN_RATE;
    }
    state.goal.wave();

    for event in &events {
        log::debug!("tick {}: {:?}", state.frame_count, event);
        spawn_effects(state, event);
    }
    state.particles.advance();

    events
}

/// Particle bursts for an event
fn spawn_effects(state: &mut GameState, event: &GameEvent) {
    let tuning = &state.tuning;
    match *event {
        GameEvent::Jumped { feet } => {
            state
                .particles
                .spawn_burst(feet, ParticleColor::Dust, tuning.jump_dust_count);
        }
        GameEvent::RunDust { feet } => {
            state
                .particles
                .spawn_burst(feet, ParticleColor::Dust, tuning.run_dust_count);
        }
        GameEvent::CoinCollected { center, .. } => {
            state
                .particles
                .spawn_burst(center, ParticleColor::Gold, tuning.coin_burst_count);
        }
        GameEvent::GoalReached { center } => {
            state
                .particles
                .spawn_burst(center, ParticleColor::Celebration, tuning.goal_burst_count);
        }
        GameEvent::LevelAdvanced { .. } | GameEvent::LevelRestarted { .. } => {}
    }
}
