//! Keyboard state for the simulation
//!
//! Key handlers write here between frames; the game loop reads a
//! `TickInput` snapshot before each tick.

use crate::sim::TickInput;

/// Keys the game listens to, by DOM `KeyboardEvent.key` value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Right,
    Left,
    Jump,
    Reset,
}

impl Key {
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Key::Right),
            "ArrowLeft" => Some(Key::Left),
            "ArrowUp" => Some(Key::Jump),
            "r" | "R" => Some(Key::Reset),
            _ => None,
        }
    }
}

/// Held movement keys plus a latched reset request
#[derive(Debug, Clone, Default)]
pub struct InputState {
    right: bool,
    left: bool,
    jump: bool,
    /// Reset key currently down (filters out auto-repeat)
    reset_held: bool,
    /// Reset pressed and not yet consumed by a tick
    reset_pending: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key-down event. Returns true if the key is one of ours.
    pub fn key_down(&mut self, key: &str) -> bool {
        let Some(key) = Key::from_dom(key) else {
            return false;
        };
        match key {
            Key::Right => self.right = true,
            Key::Left => self.left = true,
            Key::Jump => self.jump = true,
            Key::Reset => {
                if !self.reset_held {
                    self.reset_pending = true;
                }
                self.reset_held = true;
            }
        }
        true
    }

    /// Handle a key-up event. Returns true if the key is one of ours.
    pub fn key_up(&mut self, key: &str) -> bool {
        let Some(key) = Key::from_dom(key) else {
            return false;
        };
        match key {
            Key::Right => self.right = false,
            Key::Left => self.left = false,
            Key::Jump => self.jump = false,
            Key::Reset => self.reset_held = false,
        }
        true
    }

    /// Release everything (window lost focus, key-ups will never arrive)
    pub fn release_all(&mut self) {
        *self = Self {
            reset_pending: self.reset_pending,
            ..Self::default()
        };
    }

    /// Snapshot for the next tick, consuming a pending reset
    pub fn tick_input(&mut self) -> TickInput {
        TickInput {
            move_right: self.right,
            move_left: self.left,
            jump: self.jump,
            reset: std::mem::take(&mut self.reset_pending),
        }
    }
}
